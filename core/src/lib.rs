//! # Sulpharma Core
//!
//! Core business logic and domain layer for the Sulpharma backend.
//! This crate contains domain entities, the authentication and token
//! services, repository interfaces, and the error types that the API
//! layer translates into HTTP responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
