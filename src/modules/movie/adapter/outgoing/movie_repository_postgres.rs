use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::movie::application::domain::entities::{MovieDraft, MovieRecord};
use crate::movie::application::ports::outgoing::{MovieRepository, MovieRepositoryError};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct MovieRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryPostgres {
    async fn create(&self, draft: MovieDraft) -> Result<MovieRecord, MovieRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = draft_to_active(draft);
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let inserted = model.insert(&*self.db).await.map_err(map_title_error)?;

        to_record(&inserted)
    }

    async fn update(
        &self,
        id: i32,
        draft: MovieDraft,
    ) -> Result<MovieRecord, MovieRepositoryError> {
        let mut model = draft_to_active(draft);
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_title_error)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(MovieRepositoryError::NotFound)?;

        to_record(&updated)
    }

    async fn delete(&self, id: i32) -> Result<MovieRecord, MovieRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MovieRepositoryError::NotFound)?;

        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Lost a race with another delete.
        if res.rows_affected == 0 {
            return Err(MovieRepositoryError::NotFound);
        }

        to_record(&existing)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn draft_to_active(draft: MovieDraft) -> ActiveModel {
    ActiveModel {
        title: Set(draft.title),
        media_type: Set(draft.media_type.as_str().to_string()),
        director: Set(draft.director),
        budget: Set(draft.budget),
        location: Set(draft.location),
        duration: Set(draft.duration),
        year_time: Set(draft.year_time),
        details: Set(draft.details),
        ..Default::default()
    }
}

fn to_record(model: &Model) -> Result<MovieRecord, MovieRepositoryError> {
    model
        .to_record()
        .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))
}

fn map_title_error(e: DbErr) -> MovieRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("title")
    {
        MovieRepositoryError::TitleAlreadyExists
    } else {
        MovieRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> MovieRepositoryError {
    MovieRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
