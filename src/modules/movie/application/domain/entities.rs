use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Kind of media a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Movie,
    TvShow,
}

impl MediaType {
    pub const ALL: [MediaType; 2] = [MediaType::Movie, MediaType::TvShow];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "MOVIE",
            MediaType::TvShow => "TV_SHOW",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown media type: {0}")]
pub struct UnknownMediaType(pub String);

impl FromStr for MediaType {
    type Err = UnknownMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownMediaType(s.to_string()))
    }
}

/// A stored movie / TV show, as returned by every read and write operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieRecord {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Inception")]
    pub title: String,

    #[serde(rename = "type")]
    pub media_type: MediaType,

    #[schema(example = "Christopher Nolan")]
    pub director: String,

    #[schema(example = 160.0)]
    pub budget: f64,

    #[schema(example = "Los Angeles")]
    pub location: String,

    /// Minutes
    #[schema(example = 148.0)]
    pub duration: f64,

    #[schema(example = 2010)]
    pub year_time: i32,

    pub details: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Validated, normalized field values ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub media_type: MediaType,
    pub director: String,
    pub budget: f64,
    pub location: String,
    pub duration: f64,
    pub year_time: i32,
    pub details: Option<String>,
}
