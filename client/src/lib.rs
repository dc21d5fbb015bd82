//! Client data layer for the movies API.
//!
//! [`api::MoviesApi`] wraps the HTTP endpoints; [`controller::ListController`]
//! keeps the accumulated list, filters and infinite-scroll cursor a list
//! view renders from.

pub mod api;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod source;
pub mod types;

pub use api::MoviesApi;
pub use controller::{FetchTicket, ListController, LoadState, Notice, NoticeKind};
pub use error::ClientError;
pub use source::MovieSource;
pub use types::{MediaType, Movie, MoviePayload, MoviesPage, PageInfo, TypeFilter};
