use std::sync::Arc;

use crate::movie::application::ports::incoming::use_cases::{
    CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, GetMoviesPageUseCase,
    GetMoviesUseCase, UpdateMovieUseCase,
};

#[derive(Clone)]
pub struct MovieUseCases {
    pub create: Arc<dyn CreateMovieUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetMoviesUseCase + Send + Sync>,
    pub get_page: Arc<dyn GetMoviesPageUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetMovieUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateMovieUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMovieUseCase + Send + Sync>,
}
