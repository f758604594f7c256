//! User administration route handlers

pub mod delete;

pub use super::AppState;
