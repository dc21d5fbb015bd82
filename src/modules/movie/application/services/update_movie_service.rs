use async_trait::async_trait;

use crate::movie::application::{
    domain::entities::MovieRecord,
    ports::{
        incoming::use_cases::{UpdateMovieCommand, UpdateMovieError, UpdateMovieUseCase},
        outgoing::{MovieRepository, MovieRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateMovieUseCase for UpdateMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateMovieCommand) -> Result<MovieRecord, UpdateMovieError> {
        let (id, draft) = command.into_parts();
        let title = draft.title.clone();

        self.repository
            .update(id, draft)
            .await
            .map_err(|e| match e {
                MovieRepositoryError::NotFound => UpdateMovieError::NotFound,
                MovieRepositoryError::TitleAlreadyExists => {
                    UpdateMovieError::TitleAlreadyExists(title)
                }
                other => UpdateMovieError::RepositoryError(other.to_string()),
            })
    }
}
