use async_trait::async_trait;

use crate::movie::application::{
    domain::entities::MovieRecord,
    ports::{
        incoming::use_cases::{GetMoviesError, GetMoviesUseCase},
        outgoing::MovieQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetMoviesService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMoviesService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMoviesUseCase for GetMoviesService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<MovieRecord>, GetMoviesError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetMoviesError::QueryFailed(e.to_string()))
    }
}
