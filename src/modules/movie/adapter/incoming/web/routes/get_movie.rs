use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    movie::{
        adapter::incoming::web::params::parse_id,
        application::{domain::entities::MovieRecord, ports::incoming::use_cases::GetMovieError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(
        ("id" = i32, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record found", body = inline(SuccessResponse<MovieRecord>)),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/movies/{id}")]
pub async fn get_movie_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = path.into_inner();

    let Some(id) = parse_id(&raw) else {
        warn!(id = %raw, "Rejected invalid movie id");
        return ApiResponse::bad_request("Invalid id");
    };

    match data.movie.get_single.execute(id).await {
        Ok(movie) => ApiResponse::ok(movie, "Data found successfully"),
        Err(err) => map_get_movie_error(id, err),
    }
}

fn map_get_movie_error(id: i32, err: GetMovieError) -> HttpResponse {
    match err {
        GetMovieError::NotFound => ApiResponse::not_found("Data not found"),
        GetMovieError::QueryFailed(e) => {
            error!(id, error = %e, "Failed to fetch movie");
            ApiResponse::internal_error()
        }
    }
}
