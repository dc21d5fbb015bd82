use async_trait::async_trait;

use crate::movie::application::{
    domain::entities::MovieRecord,
    ports::{
        incoming::use_cases::{CreateMovieCommand, CreateMovieError, CreateMovieUseCase},
        outgoing::{MovieQuery, MovieRepository, MovieRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateMovieService<R, Q>
where
    R: MovieRepository + Send + Sync,
    Q: MovieQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateMovieService<R, Q>
where
    R: MovieRepository + Send + Sync,
    Q: MovieQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateMovieUseCase for CreateMovieService<R, Q>
where
    R: MovieRepository + Send + Sync,
    Q: MovieQuery + Send + Sync,
{
    async fn execute(&self, command: CreateMovieCommand) -> Result<MovieRecord, CreateMovieError> {
        let title = command.draft().title.clone();

        // Fast path only: the unique index still decides under concurrent inserts.
        let exists = self
            .query
            .title_exists(&title)
            .await
            .map_err(|e| CreateMovieError::RepositoryError(e.to_string()))?;

        if exists {
            return Err(CreateMovieError::TitleAlreadyExists(title));
        }

        self.repository
            .create(command.into_draft())
            .await
            .map_err(|e| match e {
                MovieRepositoryError::TitleAlreadyExists => {
                    CreateMovieError::TitleAlreadyExists(title)
                }
                other => CreateMovieError::RepositoryError(other.to_string()),
            })
    }
}
