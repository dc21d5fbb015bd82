mod movie_query;
mod movie_repository;

pub use movie_query::{MovieQuery, MovieQueryError, MoviesPage, PageRequest, MAX_PAGE, PAGE_SIZE};
pub use movie_repository::{MovieRepository, MovieRepositoryError};
