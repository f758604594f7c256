//! MySQL repository implementations

mod role_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use role_repository_impl::MySqlRoleRepository;
pub use token_repository_impl::MySqlRefreshTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use sp_core::errors::DomainError;

/// Wraps a SQLx failure as an internal domain error
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "{}", context);
    DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// True when the error is a UNIQUE constraint violation
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
