mod create_movie_use_case;
mod delete_movie_use_case;
mod get_movie_use_case;
mod get_movies_page_use_case;
mod get_movies_use_case;
mod update_movie_use_case;

pub use create_movie_use_case::{CreateMovieCommand, CreateMovieError, CreateMovieUseCase};
pub use delete_movie_use_case::{DeleteMovieError, DeleteMovieUseCase};
pub use get_movie_use_case::{GetMovieError, GetMovieUseCase};
pub use get_movies_page_use_case::{GetMoviesPageError, GetMoviesPageUseCase};
pub use get_movies_use_case::{GetMoviesError, GetMoviesUseCase};
pub use update_movie_use_case::{UpdateMovieCommand, UpdateMovieError, UpdateMovieUseCase};
