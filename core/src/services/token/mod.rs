//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Signing and verifying HMAC access tokens
//! - Issuing, redeeming and deleting opaque refresh tokens

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
