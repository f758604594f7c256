//! Request payloads and their validation rules

pub mod auth;

pub use auth::{LoginRequest, RefreshTokenRequest, RegisterRequest, RoleDto};

use sp_core::errors::DomainError;
use validator::ValidationErrors;

/// Collapses validator output into a single 400 domain error
///
/// Fields are listed in name order, e.g.
/// `password must be between 5 and 20 characters; username must be a well-formed email address`.
pub fn validation_failure(errors: &ValidationErrors) -> DomainError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let reason = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{} {}", field, reason)
            })
        })
        .collect();
    messages.sort();

    DomainError::Validation {
        message: messages.join("; "),
    }
}
