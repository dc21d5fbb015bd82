pub mod cors;
pub mod json_config;
pub mod response;

pub use cors::cors_middleware;
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse, PageMeta, PagedResponse};
