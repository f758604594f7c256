//! Configuration for the authentication service

use sp_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
    /// Delete the caller's refresh token on logout
    pub revoke_refresh_token_on_logout: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            revoke_refresh_token_on_logout: false,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
            revoke_refresh_token_on_logout: config.revoke_refresh_token_on_logout,
        }
    }
}
