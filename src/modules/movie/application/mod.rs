pub mod domain;
pub mod movie_use_cases;
pub mod ports;
pub mod services;
