use async_trait::async_trait;

use crate::movie::application::domain::entities::MovieRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMovieError {
    #[error("Movie not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMovieUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<MovieRecord, DeleteMovieError>;
}
