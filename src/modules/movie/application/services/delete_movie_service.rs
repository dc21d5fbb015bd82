use async_trait::async_trait;

use crate::movie::application::{
    domain::entities::MovieRecord,
    ports::{
        incoming::use_cases::{DeleteMovieError, DeleteMovieUseCase},
        outgoing::{MovieRepository, MovieRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteMovieUseCase for DeleteMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<MovieRecord, DeleteMovieError> {
        self.repository.delete(id).await.map_err(|e| match e {
            MovieRepositoryError::NotFound => DeleteMovieError::NotFound,
            other => DeleteMovieError::RepositoryError(other.to_string()),
        })
    }
}
