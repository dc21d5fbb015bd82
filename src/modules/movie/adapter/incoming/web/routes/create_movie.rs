use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    movie::application::{
        domain::{entities::MovieRecord, validation::RawMovie},
        ports::incoming::use_cases::{CreateMovieCommand, CreateMovieError},
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "movies",
    request_body = RawMovie,
    responses(
        (status = 201, description = "Record created", body = inline(SuccessResponse<MovieRecord>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Title already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/movies")]
pub async fn create_movie_handler(
    data: web::Data<AppState>,
    payload: web::Json<RawMovie>,
) -> impl Responder {
    // 1️⃣ Build command (validation happens here)
    let command = match CreateMovieCommand::new(&payload) {
        Ok(cmd) => cmd,
        Err(errors) => {
            warn!(fields = ?errors.fields(), "Create movie validation failed");
            return ApiResponse::validation_failed(errors.0);
        }
    };

    // 2️⃣ Execute use case
    match data.movie.create.execute(command).await {
        Ok(movie) => ApiResponse::created(movie, "Data created successfully"),
        Err(err) => map_create_movie_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_movie_error(err: CreateMovieError) -> HttpResponse {
    match err {
        CreateMovieError::TitleAlreadyExists(ref title) => {
            warn!(title = %title, "Rejected duplicate movie title");
            ApiResponse::conflict(&err.to_string())
        }
        CreateMovieError::RepositoryError(e) => {
            error!(error = %e, "Failed to create movie");
            ApiResponse::internal_error()
        }
    }
}
