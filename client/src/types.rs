use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media, as sent over the wire (`MOVIE` / `TV_SHOW`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Movie,
    TvShow,
}

impl MediaType {
    /// Label shown in list rows.
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::TvShow => "TV Show",
        }
    }
}

/// A record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub director: String,
    pub budget: f64,
    pub location: String,
    pub duration: f64,
    pub year_time: i32,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    pub fn type_label(&self) -> &'static str {
        self.media_type.label()
    }

    /// Case-insensitive substring match over title, director and location.
    /// `term` must already be lowercased.
    fn matches_term(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.director.to_lowercase().contains(term)
            || self.location.to_lowercase().contains(term)
    }

    pub(crate) fn matches(&self, filter: TypeFilter, search: &str) -> bool {
        if !filter.accepts(self.media_type) {
            return false;
        }
        let term = search.trim();
        term.is_empty() || self.matches_term(&term.to_lowercase())
    }
}

/// Body for create and update. Updates always send the full record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoviePayload {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub director: String,
    pub budget: f64,
    pub location: String,
    pub duration: f64,
    pub year_time: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Movie> for MoviePayload {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            media_type: movie.media_type,
            director: movie.director.clone(),
            budget: movie.budget,
            location: movie.location.clone(),
            duration: movie.duration,
            year_time: movie.year_time,
            details: movie.details.clone(),
        }
    }
}

/// Type selector of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Movie,
    TvShow,
}

impl TypeFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Movie => MediaType::Movie.label(),
            TypeFilter::TvShow => MediaType::TvShow.label(),
        }
    }

    pub fn accepts(&self, media_type: MediaType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Movie => media_type == MediaType::Movie,
            TypeFilter::TvShow => media_type == MediaType::TvShow,
        }
    }
}

/// Pagination block of a page response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_entries: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub page_size: u64,
}

/// One page of records plus its pagination block.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviesPage {
    pub movies: Vec<Movie>,
    pub info: PageInfo,
}

/// `{ result, status, message }`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub result: T,
}

/// `{ data, result: {..page info..}, status, message }`
#[derive(Debug, Deserialize)]
pub(crate) struct PagedEnvelope {
    pub data: Vec<Movie>,
    pub result: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// `{ result: [], status, error, errors? }`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}
