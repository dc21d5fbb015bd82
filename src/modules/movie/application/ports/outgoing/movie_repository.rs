use async_trait::async_trait;

use crate::movie::application::domain::entities::{MovieDraft, MovieRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Movie not found")]
    NotFound,

    /// Raised by the store's unique index on `title`.
    #[error("Title already exists")]
    TitleAlreadyExists,
}

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, draft: MovieDraft) -> Result<MovieRecord, MovieRepositoryError>;

    /// Full replacement of every mutable field.
    async fn update(&self, id: i32, draft: MovieDraft)
        -> Result<MovieRecord, MovieRepositoryError>;

    /// Removes the row and returns it as it was before deletion.
    async fn delete(&self, id: i32) -> Result<MovieRecord, MovieRepositoryError>;
}
