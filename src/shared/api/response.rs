// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::Value;

use crate::movie::application::domain::validation::FieldError;

/// Success envelope: `{ result, status, message }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub result: T,
    pub status: u16,
    pub message: String,
}

/// Failure envelope: `{ result: [], status, error }`, plus `errors` on validation failures.
#[derive(Serialize, Clone)]
pub struct ApiError {
    pub result: Vec<Value>,
    pub status: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_entries: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub page_size: u64,
}

/// Paginated success envelope: rows in `data`, pagination in `result`.
#[derive(Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub result: PageMeta,
    pub status: u16,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn build(status: StatusCode, result: T, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            result,
            status: status.as_u16(),
            message: message.to_string(),
        })
    }

    pub fn ok(result: T, message: &str) -> HttpResponse {
        Self::build(StatusCode::OK, result, message)
    }

    pub fn created(result: T, message: &str) -> HttpResponse {
        Self::build(StatusCode::CREATED, result, message)
    }
}

impl<T: Serialize> PagedResponse<T> {
    pub fn ok(data: Vec<T>, meta: PageMeta, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(PagedResponse {
            data,
            result: meta,
            status: StatusCode::OK.as_u16(),
            message: message.to_string(),
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            result: Vec::new(),
            status: status.as_u16(),
            error: message.to_string(),
            errors: None,
        })
    }

    pub fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiError {
            result: Vec::new(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            error: "Validation Failed".to_string(),
            errors: Some(errors),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}
