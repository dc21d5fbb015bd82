use crate::api::schemas::{ErrorResponse, PageMetaSchema};
use crate::movie::application::domain::{
    entities::{MediaType, MovieRecord},
    validation::{FieldError, RawMovie},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        version = "1.0.0",
        description = "CRUD and paginated listing for a personal collection of movies and TV shows"
    ),
    paths(
        crate::movie::adapter::incoming::web::routes::create_movie_handler,
        crate::movie::adapter::incoming::web::routes::get_movies_handler,
        crate::movie::adapter::incoming::web::routes::get_movies_page_handler,
        crate::movie::adapter::incoming::web::routes::get_movie_handler,
        crate::movie::adapter::incoming::web::routes::update_movie_handler,
        crate::movie::adapter::incoming::web::routes::delete_movie_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            PageMetaSchema,
            FieldError,

            // Movie DTOs
            RawMovie,
            MovieRecord,
            MediaType
        )
    ),
    tags(
        (name = "movies", description = "Movie and TV show records"),
    )
)]
pub struct ApiDoc;
