//! In-memory implementation of both movie ports, used to drive the real
//! services and handlers end to end without a database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::movie::application::domain::entities::{MovieDraft, MovieRecord};
use crate::movie::application::ports::outgoing::{
    MovieQuery, MovieQueryError, MovieRepository, MovieRepositoryError, MoviesPage, PageRequest,
};

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, MovieRecord>,
}

#[derive(Clone, Default)]
pub struct InMemoryMovieStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    fn title_taken(inner: &Inner, title: &str, except: Option<i32>) -> bool {
        inner
            .rows
            .values()
            .any(|m| m.title == title && Some(m.id) != except)
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieStore {
    async fn create(&self, draft: MovieDraft) -> Result<MovieRecord, MovieRepositoryError> {
        let mut inner = self.inner.lock().unwrap();

        // Same contract as the unique index on the real table.
        if Self::title_taken(&inner, &draft.title, None) {
            return Err(MovieRepositoryError::TitleAlreadyExists);
        }

        inner.next_id += 1;
        let now = Utc::now();
        let record = MovieRecord {
            id: inner.next_id,
            title: draft.title,
            media_type: draft.media_type,
            director: draft.director,
            budget: draft.budget,
            location: draft.location,
            duration: draft.duration,
            year_time: draft.year_time,
            details: draft.details,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: i32,
        draft: MovieDraft,
    ) -> Result<MovieRecord, MovieRepositoryError> {
        let mut inner = self.inner.lock().unwrap();

        if !inner.rows.contains_key(&id) {
            return Err(MovieRepositoryError::NotFound);
        }
        if Self::title_taken(&inner, &draft.title, Some(id)) {
            return Err(MovieRepositoryError::TitleAlreadyExists);
        }

        let row = inner
            .rows
            .get_mut(&id)
            .ok_or(MovieRepositoryError::NotFound)?;
        row.title = draft.title;
        row.media_type = draft.media_type;
        row.director = draft.director;
        row.budget = draft.budget;
        row.location = draft.location;
        row.duration = draft.duration;
        row.year_time = draft.year_time;
        row.details = draft.details;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<MovieRecord, MovieRepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&id)
            .ok_or(MovieRepositoryError::NotFound)
    }
}

#[async_trait]
impl MovieQuery for InMemoryMovieStore {
    async fn list_all(&self) -> Result<Vec<MovieRecord>, MovieQueryError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn list_page(&self, page: PageRequest) -> Result<MoviesPage, MovieQueryError> {
        let inner = self.inner.lock().unwrap();

        Ok(MoviesPage {
            items: inner
                .rows
                .values()
                .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
                .take(page.page_size() as usize)
                .cloned()
                .collect(),
            total_entries: inner.rows.len() as u64,
            current_page: page.page(),
            page_size: page.page_size(),
        })
    }

    async fn get_by_id(&self, id: i32) -> Result<MovieRecord, MovieQueryError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or(MovieQueryError::NotFound)
    }

    async fn title_exists(&self, title: &str) -> Result<bool, MovieQueryError> {
        Ok(Self::title_taken(&self.inner.lock().unwrap(), title, None))
    }
}
