// src/modules/movie/adapter/outgoing/movie_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::movie::application::domain::entities::MovieRecord;
use crate::movie::application::ports::outgoing::{
    MovieQuery, MovieQueryError, MoviesPage, PageRequest,
};

use super::sea_orm_entity::{Column, Entity, Model};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct MovieQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieQuery for MovieQueryPostgres {
    async fn list_all(&self) -> Result<Vec<MovieRecord>, MovieQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_records(models)
    }

    async fn list_page(&self, page: PageRequest) -> Result<MoviesPage, MovieQueryError> {
        let query = Entity::find().order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.page_size())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(MoviesPage {
            items: to_records(models)?,
            total_entries: total,
            current_page: page.page(),
            page_size: page.page_size(),
        })
    }

    async fn get_by_id(&self, id: i32) -> Result<MovieRecord, MovieQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MovieQueryError::NotFound)?;

        to_record(&model)
    }

    async fn title_exists(&self, title: &str) -> Result<bool, MovieQueryError> {
        let count = Entity::find()
            .filter(Column::Title.eq(title))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_record(model: &Model) -> Result<MovieRecord, MovieQueryError> {
    model
        .to_record()
        .map_err(|e| MovieQueryError::DatabaseError(e.to_string()))
}

fn to_records(models: Vec<Model>) -> Result<Vec<MovieRecord>, MovieQueryError> {
    models.iter().map(to_record).collect()
}

fn map_db_err(e: DbErr) -> MovieQueryError {
    MovieQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
