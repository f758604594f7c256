//! HTTP layer of the Sulpharma backend: routing, request validation, the
//! access guard and translation of domain errors into responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
