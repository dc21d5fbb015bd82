mod create_movie;
mod delete_movie;
mod get_movie;
mod get_movies;
mod get_movies_page;
mod update_movie;

pub use create_movie::*;
pub use delete_movie::*;
pub use get_movie::*;
pub use get_movies::*;
pub use get_movies_page::*;
pub use update_movie::*;
