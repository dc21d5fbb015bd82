use chrono::Utc;
use serde_json::json;

use crate::movie::application::domain::{
    entities::{MediaType, MovieRecord},
    validation::RawMovie,
};

/// A payload that passes validation, with numbers sent as strings the way a form would.
pub fn raw_movie(title: &str) -> RawMovie {
    RawMovie {
        title: Some(json!(title)),
        media_type: Some(json!("MOVIE")),
        director: Some(json!("Christopher Nolan")),
        budget: Some(json!("160")),
        location: Some(json!("Los Angeles")),
        duration: Some(json!(148)),
        year_time: Some(json!("2010")),
        details: Some(json!("Dream heist")),
    }
}

pub fn sample_movie(id: i32, title: &str) -> MovieRecord {
    let now = Utc::now();

    MovieRecord {
        id,
        title: title.to_string(),
        media_type: MediaType::Movie,
        director: "Christopher Nolan".to_string(),
        budget: 160.0,
        location: "Los Angeles".to_string(),
        duration: 148.0,
        year_time: 2010,
        details: Some("Dream heist".to_string()),
        created_at: now,
        updated_at: now,
    }
}
