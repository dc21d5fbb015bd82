use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    movie::{
        adapter::incoming::web::params::parse_id,
        application::{
            domain::{entities::MovieRecord, validation::RawMovie},
            ports::incoming::use_cases::{UpdateMovieCommand, UpdateMovieError},
        },
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
    put,
    path = "/api/movies/{id}",
    tag = "movies",
    params(
        ("id" = i32, Path, description = "Record id")
    ),
    request_body = RawMovie,
    responses(
        (status = 200, description = "Record replaced", body = inline(SuccessResponse<MovieRecord>)),
        (status = 400, description = "Invalid id or validation failed", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 409, description = "Title already used by another record", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/movies/{id}")]
pub async fn update_movie_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<RawMovie>,
) -> impl Responder {
    let raw = path.into_inner();

    let Some(id) = parse_id(&raw) else {
        warn!(id = %raw, "Rejected invalid movie id");
        return ApiResponse::bad_request("Invalid id");
    };

    let command = match UpdateMovieCommand::new(id, &payload) {
        Ok(cmd) => cmd,
        Err(errors) => {
            warn!(id, fields = ?errors.fields(), "Update movie validation failed");
            return ApiResponse::validation_failed(errors.0);
        }
    };

    match data.movie.update.execute(command).await {
        Ok(movie) => ApiResponse::ok(movie, "Data updated successfully"),
        Err(err) => map_update_movie_error(id, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_movie_error(id: i32, err: UpdateMovieError) -> HttpResponse {
    match err {
        UpdateMovieError::NotFound => ApiResponse::not_found("Data not updated"),
        UpdateMovieError::TitleAlreadyExists(ref title) => {
            warn!(id, title = %title, "Rejected duplicate movie title on update");
            ApiResponse::conflict(&err.to_string())
        }
        UpdateMovieError::RepositoryError(e) => {
            error!(id, error = %e, "Failed to update movie");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::{
        movie::application::ports::incoming::use_cases::UpdateMovieUseCase,
        tests::support::{
            app_state_builder::TestAppStateBuilder, movie_fixtures::sample_movie,
        },
    };

    /* --------------------------------------------------
     * Mock UpdateMovieUseCase (records the command it received)
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockUpdateMovieUseCase {
        result: Result<MovieRecord, UpdateMovieError>,
        seen: Arc<Mutex<Option<UpdateMovieCommand>>>,
    }

    impl MockUpdateMovieUseCase {
        fn new(result: Result<MovieRecord, UpdateMovieError>) -> Self {
            Self {
                result,
                seen: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl UpdateMovieUseCase for MockUpdateMovieUseCase {
        async fn execute(
            &self,
            command: UpdateMovieCommand,
        ) -> Result<MovieRecord, UpdateMovieError> {
            *self.seen.lock().unwrap() = Some(command);
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn body(title: &str) -> serde_json::Value {
        serde_json::json!({
            "title": format!("  {title}  "),
            "type": "TV_SHOW",
            "director": "Vince Gilligan",
            "budget": 3,
            "location": "Albuquerque",
            "duration": "47.5",
            "year_time": 2008
        })
    }

    async fn call(
        mock: MockUpdateMovieUseCase,
        uri: &str,
        payload: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_update_movie(mock)
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(update_movie_handler)).await;

        let req = test::TestRequest::put()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, read_json(resp).await)
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn update_movie_success_passes_normalized_command() {
        let mock = MockUpdateMovieUseCase::new(Ok(sample_movie(5, "Breaking Bad")));
        let seen = Arc::clone(&mock.seen);

        let (status, json) = call(mock, "/api/movies/5", body("Breaking Bad")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Data updated successfully");

        let command = seen.lock().unwrap().take().unwrap();
        assert_eq!(command.id(), 5);
        assert_eq!(command.draft().title, "Breaking Bad");
        assert_eq!(command.draft().duration, 47.5);
    }

    #[actix_web::test]
    async fn update_movie_missing_row_returns_not_found() {
        let mock = MockUpdateMovieUseCase::new(Err(UpdateMovieError::NotFound));

        let (status, json) = call(mock, "/api/movies/77", body("Breaking Bad")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Data not updated");
    }

    #[actix_web::test]
    async fn update_movie_validation_failure_skips_use_case() {
        let mock = MockUpdateMovieUseCase::new(Ok(sample_movie(5, "Breaking Bad")));
        let seen = Arc::clone(&mock.seen);

        let mut payload = body("Breaking Bad");
        payload["duration"] = serde_json::json!("Infinity");

        let (status, json) = call(mock, "/api/movies/5", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["field"], "duration");
        assert!(seen.lock().unwrap().is_none());
    }

    #[actix_web::test]
    async fn update_movie_invalid_id_returns_bad_request() {
        let mock = MockUpdateMovieUseCase::new(Ok(sample_movie(5, "Breaking Bad")));

        let (status, json) = call(mock, "/api/movies/0", body("Breaking Bad")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid id");
    }

    #[actix_web::test]
    async fn update_movie_title_collision_returns_conflict() {
        let mock = MockUpdateMovieUseCase::new(Err(UpdateMovieError::TitleAlreadyExists(
            "Breaking Bad".into(),
        )));

        let (status, json) = call(mock, "/api/movies/5", body("Breaking Bad")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["status"], 409);
    }
}
