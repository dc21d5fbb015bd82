use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::{
    api::schemas::{ErrorResponse, PagedSuccessResponse},
    movie::{
        adapter::incoming::web::params::parse_page,
        application::{
            domain::entities::MovieRecord, ports::incoming::use_cases::GetMoviesPageError,
        },
    },
    shared::api::{ApiResponse, PageMeta, PagedResponse},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/movies/page/{page}",
    tag = "movies",
    params(
        ("page" = u64, Path, description = "1-based page number; pages hold 10 records")
    ),
    responses(
        (status = 200, description = "One page of records ordered by id", body = inline(PagedSuccessResponse<MovieRecord>)),
        (status = 400, description = "Invalid page number", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/movies/page/{page}")]
pub async fn get_movies_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = path.into_inner();

    let Some(page) = parse_page(&raw) else {
        warn!(page = %raw, "Rejected invalid page number");
        return ApiResponse::bad_request("Invalid page number");
    };

    match data.movie.get_page.execute(page).await {
        Ok(result) => {
            let meta = PageMeta {
                total_entries: result.total_entries,
                total_pages: result.total_pages(),
                current_page: result.current_page,
                page_size: result.page_size,
            };
            let message = format!("Page {} of data retrieved successfully", result.current_page);
            PagedResponse::ok(result.items, meta, &message)
        }
        Err(GetMoviesPageError::QueryFailed(e)) => {
            error!(page = page.page(), error = %e, "Failed to fetch movies page");
            ApiResponse::internal_error()
        }
    }
}
