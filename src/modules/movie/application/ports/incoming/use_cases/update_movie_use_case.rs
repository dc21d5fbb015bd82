use async_trait::async_trait;

use crate::movie::application::domain::{
    entities::{MovieDraft, MovieRecord},
    validation::{RawMovie, ValidationErrors},
};

/// Full-payload update; there are no partial-update semantics.
#[derive(Debug, Clone)]
pub struct UpdateMovieCommand {
    id: i32,
    draft: MovieDraft,
}

impl UpdateMovieCommand {
    pub fn new(id: i32, raw: &RawMovie) -> Result<Self, ValidationErrors> {
        Ok(Self {
            id,
            draft: MovieDraft::parse(raw)?,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    pub fn into_parts(self) -> (i32, MovieDraft) {
        (self.id, self.draft)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateMovieError {
    #[error("Movie not found")]
    NotFound,

    #[error("Data with this title \"{0}\" already exists.")]
    TitleAlreadyExists(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateMovieUseCase: Send + Sync {
    async fn execute(&self, command: UpdateMovieCommand) -> Result<MovieRecord, UpdateMovieError>;
}
