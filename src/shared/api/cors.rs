// src/shared/api/cors.rs
use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Restrictive CORS policy: only the listed origins may call the API.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}
