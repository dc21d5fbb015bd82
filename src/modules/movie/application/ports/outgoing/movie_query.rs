// src/modules/movie/application/ports/outgoing/movie_query.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::movie::application::domain::entities::MovieRecord;

/// Rows per page for the paginated listing.
pub const PAGE_SIZE: u64 = 10;

/// Highest page whose offset still fits a signed 64-bit SQL `OFFSET`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / PAGE_SIZE;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// 1-based page selector. Construction guarantees `1 <= page <= MAX_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
}

impl PageRequest {
    pub fn new(page: u64) -> Option<Self> {
        (1..=MAX_PAGE).contains(&page).then_some(Self { page })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * PAGE_SIZE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoviesPage {
    pub items: Vec<MovieRecord>,
    pub total_entries: u64,
    pub current_page: u64,
    pub page_size: u64,
}

impl MoviesPage {
    pub fn total_pages(&self) -> u64 {
        self.total_entries.div_ceil(self.page_size)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieQueryError {
    #[error("Movie not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MovieQuery: Send + Sync {
    /// Every record, ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<MovieRecord>, MovieQueryError>;

    /// One page ordered by id ascending, with the total row count.
    async fn list_page(&self, page: PageRequest) -> Result<MoviesPage, MovieQueryError>;

    async fn get_by_id(&self, id: i32) -> Result<MovieRecord, MovieQueryError>;

    /// Exact, case-sensitive title match.
    async fn title_exists(&self, title: &str) -> Result<bool, MovieQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total_entries: u64) -> MoviesPage {
        MoviesPage {
            items: vec![],
            total_entries,
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }

    #[test]
    fn page_request_rejects_zero() {
        assert!(PageRequest::new(0).is_none());
        assert_eq!(PageRequest::new(1), Some(PageRequest::default()));
    }

    #[test]
    fn page_request_rejects_pages_past_the_offset_range() {
        assert!(PageRequest::new(MAX_PAGE + 1).is_none());
        assert!(PageRequest::new(u64::MAX).is_none());

        let last = PageRequest::new(MAX_PAGE).unwrap();
        assert!(last.offset() <= i64::MAX as u64);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageRequest::new(1).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3).unwrap().offset(), 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page_of(0).total_pages(), 0);
        assert_eq!(page_of(1).total_pages(), 1);
        assert_eq!(page_of(10).total_pages(), 1);
        assert_eq!(page_of(25).total_pages(), 3);
        assert_eq!(page_of(30).total_pages(), 3);
    }
}
