pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::movie;

use crate::api::openapi::ApiDoc;
use crate::movie::adapter::outgoing::{MovieQueryPostgres, MovieRepositoryPostgres};
use crate::movie::application::movie_use_cases::MovieUseCases;
use crate::movie::application::services::{
    CreateMovieService, DeleteMovieService, GetMovieService, GetMoviesPageService,
    GetMoviesService, UpdateMovieService,
};
use crate::shared::api::{cors_middleware, custom_json_config, ApiResponse};
use crate::shared::config::AppConfig;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub movie: MovieUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    Migrator::up(&conn, None).await?;
    info!("Database migrations applied");

    let db_arc = Arc::new(conn);

    // Outgoing adapters share one injected connection pool
    let movie_repo = MovieRepositoryPostgres::new(Arc::clone(&db_arc));
    let movie_query = MovieQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        movie: MovieUseCases {
            create: Arc::new(CreateMovieService::new(
                movie_repo.clone(),
                movie_query.clone(),
            )),
            get_list: Arc::new(GetMoviesService::new(movie_query.clone())),
            get_page: Arc::new(GetMoviesPageService::new(movie_query.clone())),
            get_single: Arc::new(GetMovieService::new(movie_query)),
            update: Arc::new(UpdateMovieService::new(movie_repo.clone())),
            delete: Arc::new(DeleteMovieService::new(movie_repo)),
        },
    };

    let allowed_origins = config.allowed_origins.clone();
    let openapi = ApiDoc::openapi();

    info!(address = %server_url, origins = ?allowed_origins, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&allowed_origins))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .default_service(web::to(route_not_found))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Movies
    cfg.service(crate::movie::adapter::incoming::web::routes::create_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::get_movies_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::get_movies_page_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::get_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::update_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::delete_movie_handler);
}

pub async fn route_not_found() -> HttpResponse {
    ApiResponse::not_found("Route not found")
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
