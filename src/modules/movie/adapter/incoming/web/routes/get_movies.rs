use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    movie::application::{
        domain::entities::MovieRecord, ports::incoming::use_cases::GetMoviesError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    responses(
        (status = 200, description = "Every record ordered by id; empty when the store is empty", body = inline(SuccessResponse<Vec<MovieRecord>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/movies")]
pub async fn get_movies_handler(data: web::Data<AppState>) -> impl Responder {
    match data.movie.get_list.execute().await {
        Ok(movies) => ApiResponse::ok(movies, "Data found successfully"),
        Err(GetMoviesError::QueryFailed(e)) => {
            error!(error = %e, "Failed to list movies");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        movie::application::ports::incoming::use_cases::GetMoviesUseCase,
        tests::support::{
            app_state_builder::TestAppStateBuilder, movie_fixtures::sample_movie,
        },
    };

    #[derive(Clone)]
    struct MockGetMoviesUseCase {
        result: Result<Vec<MovieRecord>, GetMoviesError>,
    }

    #[async_trait]
    impl GetMoviesUseCase for MockGetMoviesUseCase {
        async fn execute(&self) -> Result<Vec<MovieRecord>, GetMoviesError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn get_movies_returns_every_record() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_movies(MockGetMoviesUseCase {
                result: Ok(vec![sample_movie(1, "Alien"), sample_movie(2, "Aliens")]),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_movies_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/movies").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["message"], "Data found successfully");
        assert_eq!(json["result"].as_array().unwrap().len(), 2);
        assert_eq!(json["result"][1]["title"], "Aliens");
    }

    #[actix_web::test]
    async fn get_movies_empty_store_is_ok() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_movies(MockGetMoviesUseCase { result: Ok(vec![]) })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_movies_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/movies").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["result"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn get_movies_query_error_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_movies(MockGetMoviesUseCase {
                result: Err(GetMoviesError::QueryFailed("boom".into())),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_movies_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/movies").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(resp).await["status"], 500);
    }
}
