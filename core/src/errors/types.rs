//! Domain-specific error types for authentication and related operations
//!
//! The `Display` text of each variant is what clients see in the `message`
//! field of an error response, so wording here is part of the HTTP contract.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username and wrong password are deliberately indistinguishable
    #[error("Bad credentials")]
    InvalidCredentials,

    #[error("User with the given email already exists.")]
    UserAlreadyExists,

    /// A requested role is missing from the role store; treated as an
    /// unrecoverable server-side failure
    #[error("Error: Role {role} is not found.")]
    RoleNotFound { role: String },

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Password hashing failed")]
    PasswordHashingFailed,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid JWT signature")]
    InvalidSignature,

    #[error("Invalid JWT token")]
    MalformedToken,

    #[error("JWT token is expired")]
    TokenExpired,

    #[error("JWT token is unsupported")]
    UnsupportedToken,

    #[error("JWT claims string is empty")]
    EmptyClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Failed for [{token}]: Refresh token is not in database!")]
    RefreshTokenNotFound { token: String },

    #[error("Failed for [{token}]: Refresh token was expired. Please make a new signin request")]
    RefreshTokenExpired { token: String },
}
