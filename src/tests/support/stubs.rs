use async_trait::async_trait;

use crate::movie::application::domain::entities::MovieRecord;
use crate::movie::application::ports::incoming::use_cases::{
    CreateMovieCommand, CreateMovieError, CreateMovieUseCase, DeleteMovieError,
    DeleteMovieUseCase, GetMovieError, GetMovieUseCase, GetMoviesError, GetMoviesPageError,
    GetMoviesPageUseCase, GetMoviesUseCase, UpdateMovieCommand, UpdateMovieError,
    UpdateMovieUseCase,
};
use crate::movie::application::ports::outgoing::{MoviesPage, PageRequest};

// ============================================================
// Default stubs: every use case answers as if the store were empty
// ============================================================

pub struct StubCreateMovieUseCase;

#[async_trait]
impl CreateMovieUseCase for StubCreateMovieUseCase {
    async fn execute(&self, _command: CreateMovieCommand) -> Result<MovieRecord, CreateMovieError> {
        Err(CreateMovieError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubGetMoviesUseCase;

#[async_trait]
impl GetMoviesUseCase for StubGetMoviesUseCase {
    async fn execute(&self) -> Result<Vec<MovieRecord>, GetMoviesError> {
        Ok(vec![])
    }
}

pub struct StubGetMoviesPageUseCase;

#[async_trait]
impl GetMoviesPageUseCase for StubGetMoviesPageUseCase {
    async fn execute(&self, page: PageRequest) -> Result<MoviesPage, GetMoviesPageError> {
        Ok(MoviesPage {
            items: vec![],
            total_entries: 0,
            current_page: page.page(),
            page_size: page.page_size(),
        })
    }
}

pub struct StubGetMovieUseCase;

#[async_trait]
impl GetMovieUseCase for StubGetMovieUseCase {
    async fn execute(&self, _id: i32) -> Result<MovieRecord, GetMovieError> {
        Err(GetMovieError::NotFound)
    }
}

pub struct StubUpdateMovieUseCase;

#[async_trait]
impl UpdateMovieUseCase for StubUpdateMovieUseCase {
    async fn execute(&self, _command: UpdateMovieCommand) -> Result<MovieRecord, UpdateMovieError> {
        Err(UpdateMovieError::NotFound)
    }
}

pub struct StubDeleteMovieUseCase;

#[async_trait]
impl DeleteMovieUseCase for StubDeleteMovieUseCase {
    async fn execute(&self, _id: i32) -> Result<MovieRecord, DeleteMovieError> {
        Err(DeleteMovieError::NotFound)
    }
}
