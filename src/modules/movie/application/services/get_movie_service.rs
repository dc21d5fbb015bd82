use async_trait::async_trait;

use crate::movie::application::{
    domain::entities::MovieRecord,
    ports::{
        incoming::use_cases::{GetMovieError, GetMovieUseCase},
        outgoing::{MovieQuery, MovieQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct GetMovieService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMovieService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMovieUseCase for GetMovieService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<MovieRecord, GetMovieError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            MovieQueryError::NotFound => GetMovieError::NotFound,
            other => GetMovieError::QueryFailed(other.to_string()),
        })
    }
}
