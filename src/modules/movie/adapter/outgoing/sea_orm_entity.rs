use sea_orm::entity::prelude::*;

use crate::movie::application::domain::entities::{MediaType, MovieRecord, UnknownMediaType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub title: String,

    /// Wire name of [`MediaType`]; the column carries a CHECK constraint.
    #[sea_orm(column_name = "type")]
    pub media_type: String,

    pub director: String,

    #[sea_orm(column_type = "Double")]
    pub budget: f64,

    pub location: String,

    #[sea_orm(column_type = "Double")]
    pub duration: f64,

    pub year_time: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> Result<MovieRecord, UnknownMediaType> {
        Ok(MovieRecord {
            id: self.id,
            title: self.title.clone(),
            media_type: self.media_type.parse::<MediaType>()?,
            director: self.director.clone(),
            budget: self.budget,
            location: self.location.clone(),
            duration: self.duration,
            year_time: self.year_time,
            details: self.details.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(media_type: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: 3,
            title: "Fargo".into(),
            media_type: media_type.into(),
            director: "Noah Hawley".into(),
            budget: 10.0,
            location: "Calgary".into(),
            duration: 53.0,
            year_time: 2014,
            details: Some("Anthology".into()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn to_record_maps_every_column() {
        let record = model("TV_SHOW").to_record().unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.media_type, MediaType::TvShow);
        assert_eq!(record.year_time, 2014);
        assert_eq!(record.details.as_deref(), Some("Anthology"));
    }

    #[test]
    fn to_record_rejects_unknown_type() {
        assert!(model("DOCUMENTARY").to_record().is_err());
    }
}
