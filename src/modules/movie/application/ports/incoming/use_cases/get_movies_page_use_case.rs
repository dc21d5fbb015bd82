use async_trait::async_trait;

use crate::movie::application::ports::outgoing::{MoviesPage, PageRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMoviesPageError {
    #[error("Failed to fetch movies page: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMoviesPageUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<MoviesPage, GetMoviesPageError>;
}
