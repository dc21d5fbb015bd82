//! REST client for the movies API.
//!
//! Thin typed wrappers over the `/movies` endpoints using [`reqwest`]. Every
//! call unwraps the server envelope and returns the payload, or a
//! [`ClientError`] carrying the envelope's `error` message.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::{Envelope, ErrorEnvelope, Movie, MoviePayload, MoviesPage, PagedEnvelope};

/// HTTP client for one API deployment.
#[derive(Clone)]
pub struct MoviesApi {
    client: reqwest::Client,
    api_url: String,
}

impl MoviesApi {
    /// * `api_url` - Base URL including the `/api` prefix, e.g. `http://localhost:4040/api`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET /movies`
    pub async fn get_movies(&self) -> Result<Vec<Movie>, ClientError> {
        let response = self
            .client
            .get(format!("{}/movies", self.api_url))
            .send()
            .await?;

        Self::parse_result(response).await
    }

    /// `GET /movies/page/{page}`
    pub async fn get_movies_page(&self, page: u64) -> Result<MoviesPage, ClientError> {
        let response = self
            .client
            .get(format!("{}/movies/page/{}", self.api_url, page))
            .send()
            .await?;

        let envelope: PagedEnvelope = Self::parse_response(response).await?;
        Ok(MoviesPage {
            movies: envelope.data,
            info: envelope.result,
        })
    }

    /// `GET /movies/{id}`
    pub async fn get_movie(&self, id: i32) -> Result<Movie, ClientError> {
        let response = self
            .client
            .get(format!("{}/movies/{}", self.api_url, id))
            .send()
            .await?;

        Self::parse_result(response).await
    }

    /// `POST /movies`
    pub async fn add_movie(&self, movie: &MoviePayload) -> Result<Movie, ClientError> {
        let response = self
            .client
            .post(format!("{}/movies", self.api_url))
            .json(movie)
            .send()
            .await?;

        Self::parse_result(response).await
    }

    /// `PUT /movies/{id}`
    pub async fn update_movie(&self, id: i32, movie: &MoviePayload) -> Result<Movie, ClientError> {
        let response = self
            .client
            .put(format!("{}/movies/{}", self.api_url, id))
            .json(movie)
            .send()
            .await?;

        Self::parse_result(response).await
    }

    /// `DELETE /movies/{id}`, returning the removed record.
    pub async fn delete_movie(&self, id: i32) -> Result<Movie, ClientError> {
        let response = self
            .client
            .delete(format!("{}/movies/{}", self.api_url, id))
            .send()
            .await?;

        Self::parse_result(response).await
    }

    // ---- private helpers ----

    /// Returns the response unchanged on a 2xx status, otherwise a
    /// [`ClientError::Api`] built from the error envelope (or raw body).
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {e}>"));

        let (message, errors) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error, envelope.errors),
            Err(_) => (body, Vec::new()),
        };

        tracing::debug!(status = status.as_u16(), %message, "API returned an error");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            errors,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn parse_result<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let envelope: Envelope<T> = Self::parse_response(response).await?;
        Ok(envelope.result)
    }
}
