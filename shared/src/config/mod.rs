//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing, password hashing and session policy
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! Every area exposes a `from_env()` constructor that falls back to a
//! development-friendly default when a variable is missing or unparsable.
//! Unparsable values are logged at warn level.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

pub use auth::{AuthConfig, JwtConfig, MAX_TOKEN_EXPIRY_SECONDS};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Reads an environment variable and parses it, falling back to `default`.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => parse_or(key, &value, default),
        Err(_) => default,
    }
}

/// Reads a boolean switch; accepts true/false, 1/0, yes/no and on/off.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => parse_flag(key, &value, default),
        Err(_) => default,
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, value: &str, default: T) -> T {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(key, value, "Unparsable configuration value, using default");
            default
        }
    }
}

fn parse_flag(key: &str, value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value, "Unrecognized switch value, using default");
            default
        }
    }
}
