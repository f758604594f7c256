//! Authentication route handlers
//!
//! This module contains the sign-up and sign-in endpoints:
//! - Registration and login
//! - Access token refresh
//! - Current user lookup
//! - Logout

pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;

pub use super::AppState;
