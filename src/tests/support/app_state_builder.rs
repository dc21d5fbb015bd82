use crate::movie::application::movie_use_cases::MovieUseCases;
use crate::movie::application::ports::incoming::use_cases::{
    CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, GetMoviesPageUseCase,
    GetMoviesUseCase, UpdateMovieUseCase,
};
use crate::movie::application::services::{
    CreateMovieService, DeleteMovieService, GetMovieService, GetMoviesPageService,
    GetMoviesService, UpdateMovieService,
};
use crate::tests::support::in_memory_store::InMemoryMovieStore;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    movie: MovieUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            movie: MovieUseCases {
                create: Arc::new(StubCreateMovieUseCase),
                get_list: Arc::new(StubGetMoviesUseCase),
                get_page: Arc::new(StubGetMoviesPageUseCase),
                get_single: Arc::new(StubGetMovieUseCase),
                update: Arc::new(StubUpdateMovieUseCase),
                delete: Arc::new(StubDeleteMovieUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Wires the real services over a shared in-memory store.
    pub fn with_in_memory_store(store: InMemoryMovieStore) -> Self {
        Self {
            movie: MovieUseCases {
                create: Arc::new(CreateMovieService::new(store.clone(), store.clone())),
                get_list: Arc::new(GetMoviesService::new(store.clone())),
                get_page: Arc::new(GetMoviesPageService::new(store.clone())),
                get_single: Arc::new(GetMovieService::new(store.clone())),
                update: Arc::new(UpdateMovieService::new(store.clone())),
                delete: Arc::new(DeleteMovieService::new(store)),
            },
        }
    }

    pub fn with_create_movie(
        mut self,
        uc: impl CreateMovieUseCase + Send + Sync + 'static,
    ) -> Self {
        self.movie.create = Arc::new(uc);
        self
    }

    pub fn with_get_movies(mut self, uc: impl GetMoviesUseCase + Send + Sync + 'static) -> Self {
        self.movie.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_movies_page(
        mut self,
        uc: impl GetMoviesPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.movie.get_page = Arc::new(uc);
        self
    }

    pub fn with_get_movie(mut self, uc: impl GetMovieUseCase + Send + Sync + 'static) -> Self {
        self.movie.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_movie(
        mut self,
        uc: impl UpdateMovieUseCase + Send + Sync + 'static,
    ) -> Self {
        self.movie.update = Arc::new(uc);
        self
    }

    pub fn with_delete_movie(
        mut self,
        uc: impl DeleteMovieUseCase + Send + Sync + 'static,
    ) -> Self {
        self.movie.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { movie: self.movie })
    }
}
