//! Authentication service module
//!
//! This module provides the authentication flow:
//! - User registration with role assignment
//! - Login, access token refresh and logout
//! - Resolving a bearer token into a request identity
//! - Role-based authorization checks

mod authorization;
mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use authorization::authorize;
pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::{AuthService, LOGOUT_MESSAGE};
