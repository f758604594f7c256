//! Configuration for the token service

use jsonwebtoken::Algorithm;
use sp_shared::config::{JwtConfig, MAX_TOKEN_EXPIRY_SECONDS};

use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm, one of the HMAC family
    pub algorithm: Algorithm,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS512,
            access_token_expiry_seconds: 900,
            refresh_token_expiry_seconds: 604800,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration
    ///
    /// Only symmetric algorithms are accepted.
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = match jwt.algorithm.to_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(DomainError::Internal {
                    message: format!("Unsupported JWT algorithm: {}", other),
                })
            }
        };

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            access_token_expiry_seconds: jwt.access_token_expiry,
            refresh_token_expiry_seconds: jwt.refresh_token_expiry,
        })
    }

    /// Lifetimes short enough that `now + ttl` cannot overflow
    pub fn has_valid_expiry(&self) -> bool {
        let range = 1..=MAX_TOKEN_EXPIRY_SECONDS;
        range.contains(&self.access_token_expiry_seconds)
            && range.contains(&self.refresh_token_expiry_seconds)
    }
}

pub(crate) fn is_hmac(algorithm: Algorithm) -> bool {
    matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)
}
