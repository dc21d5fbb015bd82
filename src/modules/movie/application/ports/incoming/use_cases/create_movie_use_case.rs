use async_trait::async_trait;

use crate::movie::application::domain::{
    entities::{MovieDraft, MovieRecord},
    validation::{RawMovie, ValidationErrors},
};

//
// ──────────────────────────────────────────────────────────
// Create Movie Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateMovieCommand {
    draft: MovieDraft,
}

impl CreateMovieCommand {
    pub fn new(raw: &RawMovie) -> Result<Self, ValidationErrors> {
        Ok(Self {
            draft: MovieDraft::parse(raw)?,
        })
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    pub fn into_draft(self) -> MovieDraft {
        self.draft
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateMovieError {
    #[error("Data with this title \"{0}\" already exists.")]
    TitleAlreadyExists(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateMovieUseCase: Send + Sync {
    async fn execute(&self, command: CreateMovieCommand) -> Result<MovieRecord, CreateMovieError>;
}
