//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Sulpharma backend,
//! following Clean Architecture principles. It provides the MySQL-backed
//! implementations of the repository traits declared in `sp_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, embedded migrations and MySQL
//!   repositories using SQLx

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{
    DatabasePool, MySqlRefreshTokenRepository, MySqlRoleRepository, MySqlUserRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
