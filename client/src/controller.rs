//! List/sync state for the movies list view.
//!
//! The controller accumulates pages fetched from a [`MovieSource`], projects
//! them through the type filter and debounced search term, and tracks the
//! infinite-scroll cursor. Filtering and search only look at pages already
//! loaded; they never hit the network.
//!
//! Every fetch is issued with a [`FetchTicket`]. Only the ticket of the most
//! recent fetch is applied, so a slow response that was superseded by a
//! newer request (a reset after a mutation, say) cannot overwrite newer state.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::debounce::{Debounced, SEARCH_DEBOUNCE};
use crate::error::{ClientError, FETCH_FAILED};
use crate::source::MovieSource;
use crate::types::{Movie, MoviePayload, MoviesPage, TypeFilter};

const ADD_FAILED: &str = "Failed to add data. Please try again.";
const UPDATE_FAILED: &str = "Failed to update data.";
const DELETE_FAILED: &str = "Failed to delete data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    /// First page in flight.
    Loading,
    /// A follow-up page in flight; suppresses further load-more triggers.
    LoadingMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u64,
    generation: u64,
}

pub struct ListController<S> {
    source: Arc<S>,
    all_movies: Vec<Movie>,
    filter: TypeFilter,
    search: Debounced<String>,
    page: u64,
    total_pages: u64,
    has_more: bool,
    state: LoadState,
    generation: u64,
    notice: Option<Notice>,
}

impl<S: MovieSource> ListController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            all_movies: Vec::new(),
            filter: TypeFilter::All,
            search: Debounced::new(String::new(), SEARCH_DEBOUNCE),
            page: 1,
            total_pages: 0,
            has_more: true,
            state: LoadState::Idle,
            generation: 0,
            notice: None,
        }
    }

    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    /// Every record loaded so far, in arrival order.
    pub fn movies(&self) -> &[Movie] {
        &self.all_movies
    }

    /// Loaded records that pass the type filter and the settled search term.
    pub fn visible(&self) -> Vec<&Movie> {
        let term = self.search.settled();
        self.all_movies
            .iter()
            .filter(|m| m.matches(self.filter, term))
            .collect()
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Nothing left to page in.
    pub fn is_exhausted(&self) -> bool {
        !self.has_more
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.reset_cursor();
        }
    }

    /// Raw search input; takes effect once it has been quiet for the debounce window.
    pub fn search_term(&self) -> &str {
        self.search.raw()
    }

    pub fn debounced_search(&self) -> &str {
        self.search.settled()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search.set(term.into());
    }

    /// Applies the search term if its debounce window has passed.
    pub fn poll_search(&mut self) -> bool {
        let changed = self.search.poll();
        if changed {
            self.reset_cursor();
        }
        changed
    }

    /// Waits for the pending search term to settle, then applies it.
    pub async fn settle_search(&mut self) -> bool {
        let changed = self.search.wait().await;
        if changed {
            self.reset_cursor();
        }
        changed
    }

    /// Starts a fetch of `page`. Returns `None` when the page lies beyond
    /// the last known page, which also marks the list exhausted.
    pub fn begin_fetch(&mut self, page: u64) -> Option<FetchTicket> {
        if self.total_pages > 0 && page > self.total_pages {
            self.has_more = false;
            return None;
        }

        self.generation += 1;
        self.state = if page <= 1 {
            LoadState::Loading
        } else {
            LoadState::LoadingMore
        };

        Some(FetchTicket {
            page: page.max(1),
            generation: self.generation,
        })
    }

    /// Applies the outcome of a fetch. Returns `false` when the ticket was
    /// superseded and the result was dropped.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<MoviesPage, ClientError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                page = ticket.page,
                generation = ticket.generation,
                latest = self.generation,
                "Discarding stale page response"
            );
            return false;
        }

        self.state = LoadState::Idle;

        match result {
            Ok(page) => {
                if ticket.page == 1 {
                    self.all_movies = page.movies;
                } else {
                    self.merge(page.movies);
                }
                self.page = ticket.page;
                self.total_pages = page.info.total_pages;
                self.has_more = ticket.page < page.info.total_pages;
            }
            Err(e) => {
                warn!(page = ticket.page, error = %e, "Failed to fetch movies page");
                self.notice = Some(Notice::error(e.notice_message(FETCH_FAILED)));
            }
        }

        true
    }

    /// Fetches `page` from the source and applies it.
    pub async fn fetch(&mut self, page: u64) -> bool {
        let Some(ticket) = self.begin_fetch(page) else {
            return false;
        };
        let result = self.source.fetch_page(ticket.page).await;
        self.apply(ticket, result)
    }

    /// Drops the cursor and reloads from the first page.
    pub async fn refresh(&mut self) -> bool {
        self.reset_cursor();
        self.fetch(1).await
    }

    /// Fetches the next page when the end of the list becomes visible.
    /// No-op while a fetch is in flight or when nothing is left.
    pub async fn load_more(&mut self) -> bool {
        if self.state != LoadState::Idle || !self.has_more {
            return false;
        }
        self.fetch(self.page + 1).await
    }

    pub async fn create(&mut self, movie: &MoviePayload) -> bool {
        let result = self.source.create(movie).await;
        self.after_mutation(result, "Data added successfully.", ADD_FAILED)
            .await
    }

    pub async fn update(&mut self, id: i32, movie: &MoviePayload) -> bool {
        let result = self.source.update(id, movie).await;
        self.after_mutation(result, "Data updated successfully.", UPDATE_FAILED)
            .await
    }

    pub async fn delete(&mut self, id: i32) -> bool {
        let result = self.source.delete(id).await;
        self.after_mutation(result, "Data deleted successfully.", DELETE_FAILED)
            .await
    }

    async fn after_mutation(
        &mut self,
        result: Result<Movie, ClientError>,
        success: &str,
        fallback: &str,
    ) -> bool {
        match result {
            Ok(movie) => {
                debug!(id = movie.id, "Mutation succeeded, reloading list");
                self.notice = Some(Notice::success(success));
                self.refresh().await;
                true
            }
            Err(e) => {
                warn!(error = %e, "Mutation failed");
                self.notice = Some(Notice::error(e.notice_message(fallback)));
                false
            }
        }
    }

    fn reset_cursor(&mut self) {
        self.page = 1;
        self.has_more = true;
    }

    /// Appends rows, replacing any already loaded with the same id.
    fn merge(&mut self, movies: Vec<Movie>) {
        for movie in movies {
            match self.all_movies.iter_mut().find(|m| m.id == movie.id) {
                Some(existing) => *existing = movie,
                None => self.all_movies.push(movie),
            }
        }
    }
}
