// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::movie::application::domain::validation::FieldError;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Payload of the operation
    pub result: T,
    /// Mirrors the HTTP status code
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Data found successfully")]
    pub message: String,
}

/// Pagination metadata returned under `result` by the paged listing
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaSchema {
    #[schema(example = 25)]
    pub total_entries: u64,
    #[schema(example = 3)]
    pub total_pages: u64,
    #[schema(example = 1)]
    pub current_page: u64,
    #[schema(example = 10)]
    pub page_size: u64,
}

/// Paginated success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PagedSuccessResponse<T> {
    /// Rows of the requested page; empty past the last page
    pub data: Vec<T>,
    pub result: PageMetaSchema,
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Page 1 of data retrieved successfully")]
    pub message: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always an empty array
    #[schema(value_type = Vec<Object>)]
    pub result: Vec<serde_json::Value>,
    #[schema(example = 404)]
    pub status: u16,
    /// Human-readable error message
    #[schema(example = "Data not found")]
    pub error: String,
    /// Field-level problems, present only on validation failures
    pub errors: Option<Vec<FieldError>>,
}
