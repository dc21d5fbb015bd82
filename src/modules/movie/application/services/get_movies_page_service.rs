use async_trait::async_trait;

use crate::movie::application::ports::{
    incoming::use_cases::{GetMoviesPageError, GetMoviesPageUseCase},
    outgoing::{MovieQuery, MoviesPage, PageRequest},
};

// ============================================================================
// Service Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct GetMoviesPageService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMoviesPageService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMoviesPageUseCase for GetMoviesPageService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<MoviesPage, GetMoviesPageError> {
        self.query
            .list_page(page)
            .await
            .map_err(|e| GetMoviesPageError::QueryFailed(e.to_string()))
    }
}
