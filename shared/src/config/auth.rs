//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::{env_flag, env_or};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Upper bound for either token lifetime (ten years)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 10 * 365 * 86400;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC secret for signing access tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Algorithm for JWT signing (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Both lifetimes are positive and no longer than
    /// [`MAX_TOKEN_EXPIRY_SECONDS`]
    pub fn has_valid_expiry(&self) -> bool {
        let range = 1..=MAX_TOKEN_EXPIRY_SECONDS;
        range.contains(&self.access_token_expiry) && range.contains(&self.refresh_token_expiry)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor for password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Delete the caller's refresh token when they log out
    #[serde(default)]
    pub revoke_refresh_token_on_logout: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
            revoke_refresh_token_on_logout: false,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let algorithm = std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| default_algorithm());

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry: env_or("JWT_ACCESS_TOKEN_EXPIRY", 900),
                refresh_token_expiry: env_or("JWT_REFRESH_TOKEN_EXPIRY", 604800),
                algorithm,
            },
            bcrypt_cost: env_or("BCRYPT_COST", default_bcrypt_cost()),
            revoke_refresh_token_on_logout: env_flag("AUTH_REVOKE_ON_LOGOUT", false),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS512")
}

fn default_bcrypt_cost() -> u32 {
    12
}
