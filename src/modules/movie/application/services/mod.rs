mod create_movie_service;
mod delete_movie_service;
mod get_movie_service;
mod get_movies_page_service;
mod get_movies_service;
mod update_movie_service;

pub use create_movie_service::CreateMovieService;
pub use delete_movie_service::DeleteMovieService;
pub use get_movie_service::GetMovieService;
pub use get_movies_page_service::GetMoviesPageService;
pub use get_movies_service::GetMoviesService;
pub use update_movie_service::UpdateMovieService;
