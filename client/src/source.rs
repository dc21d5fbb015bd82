use async_trait::async_trait;

use crate::api::MoviesApi;
use crate::error::ClientError;
use crate::types::{Movie, MoviePayload, MoviesPage};

/// The calls the list controller needs from the backend.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch_page(&self, page: u64) -> Result<MoviesPage, ClientError>;
    async fn create(&self, movie: &MoviePayload) -> Result<Movie, ClientError>;
    async fn update(&self, id: i32, movie: &MoviePayload) -> Result<Movie, ClientError>;
    async fn delete(&self, id: i32) -> Result<Movie, ClientError>;
}

#[async_trait]
impl MovieSource for MoviesApi {
    async fn fetch_page(&self, page: u64) -> Result<MoviesPage, ClientError> {
        self.get_movies_page(page).await
    }

    async fn create(&self, movie: &MoviePayload) -> Result<Movie, ClientError> {
        self.add_movie(movie).await
    }

    async fn update(&self, id: i32, movie: &MoviePayload) -> Result<Movie, ClientError> {
        self.update_movie(id, movie).await
    }

    async fn delete(&self, id: i32) -> Result<Movie, ClientError> {
        self.delete_movie(id).await
    }
}
