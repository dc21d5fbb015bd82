use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    movie::{
        adapter::incoming::web::params::parse_id,
        application::{
            domain::entities::MovieRecord, ports::incoming::use_cases::DeleteMovieError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    tag = "movies",
    params(
        ("id" = i32, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record deleted; the removed record is returned", body = inline(SuccessResponse<MovieRecord>)),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/movies/{id}")]
pub async fn delete_movie_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = path.into_inner();

    let Some(id) = parse_id(&raw) else {
        warn!(id = %raw, "Rejected invalid movie id");
        return ApiResponse::bad_request("Invalid id");
    };

    match data.movie.delete.execute(id).await {
        Ok(movie) => ApiResponse::ok(movie, "Data deleted successfully"),
        Err(err) => map_delete_movie_error(id, err),
    }
}

fn map_delete_movie_error(id: i32, err: DeleteMovieError) -> HttpResponse {
    match err {
        DeleteMovieError::NotFound => ApiResponse::not_found("Data not deleted"),
        DeleteMovieError::RepositoryError(e) => {
            error!(id, error = %e, "Failed to delete movie");
            ApiResponse::internal_error()
        }
    }
}
