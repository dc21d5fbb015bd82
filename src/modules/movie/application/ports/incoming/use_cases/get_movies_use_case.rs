use async_trait::async_trait;

use crate::movie::application::domain::entities::MovieRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMoviesError {
    #[error("Failed to fetch movies: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMoviesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<MovieRecord>, GetMoviesError>;
}
