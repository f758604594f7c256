//! Translation of domain failures into HTTP responses.
//!
//! Every handler funnels its `DomainError` through `handle_domain_error`,
//! either directly or by returning `ApiError`, so the status mapping lives
//! in exactly one place.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sp_core::errors::{AuthError, DomainError, TokenError};
use sp_shared::{error_codes, ErrorResponse};
use std::fmt;
use validator::ValidationErrors;

/// Message returned in place of internal failure details
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Maps a domain error onto its HTTP status and stable error code
pub fn classify(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Unauthorized => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
            }
            AuthError::UserAlreadyExists => (StatusCode::CONFLICT, error_codes::USER_EXISTS),
            AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
            AuthError::RoleNotFound { .. } | AuthError::PasswordHashingFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::RefreshTokenNotFound { .. } => {
                (StatusCode::FORBIDDEN, error_codes::REFRESH_TOKEN_INVALID)
            }
            TokenError::RefreshTokenExpired { .. } => {
                (StatusCode::FORBIDDEN, error_codes::REFRESH_TOKEN_EXPIRED)
            }
            TokenError::TokenGenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
            TokenError::InvalidSignature
            | TokenError::MalformedToken
            | TokenError::TokenExpired
            | TokenError::UnsupportedToken
            | TokenError::EmptyClaims => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
        },
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Client errors carry the domain message verbatim. Server errors are logged
/// and replaced with a generic message, except a missing role whose message
/// names the role and nothing else.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = classify(error);

    let message = if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
        match error {
            DomainError::Auth(AuthError::RoleNotFound { .. }) => error.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    } else {
        tracing::info!(error = %error, status = status.as_u16(), "Request rejected");
        error.to_string()
    };

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// `DomainError` wrapper that actix-web can render as a response
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        classify(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(crate::dto::validation_failure(&errors))
    }
}
