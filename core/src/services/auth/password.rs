//! bcrypt password hashing, run on the blocking thread pool

use crate::errors::{AuthError, DomainError, DomainResult};

/// Hashes a raw password with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password hashing task failed: {}", e),
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "bcrypt hashing failed");
            AuthError::PasswordHashingFailed.into()
        })
}

/// Checks a raw password against a stored bcrypt hash
///
/// A stored hash that bcrypt cannot parse never matches.
pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password verification task failed: {}", e),
        })?;

    match result {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            Ok(false)
        }
    }
}
