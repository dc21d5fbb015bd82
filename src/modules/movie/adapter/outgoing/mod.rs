pub mod sea_orm_entity;
mod movie_query_postgres;
mod movie_repository_postgres;

pub use movie_query_postgres::MovieQueryPostgres;
pub use movie_repository_postgres::MovieRepositoryPostgres;
