use async_trait::async_trait;

use crate::movie::application::domain::entities::MovieRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMovieError {
    #[error("Movie not found")]
    NotFound,

    #[error("Failed to fetch movie: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMovieUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<MovieRecord, GetMovieError>;
}
