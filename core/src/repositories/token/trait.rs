//! Refresh token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// The store holds at most one token per user. Tokens are looked up by the
/// SHA-256 digest of their opaque value, never by the raw value.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Store `token` as the user's only refresh token, replacing any previous one
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The stored token with its id
    /// * `Err(DomainError)` - Database error occurred
    async fn save_for_user(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found, possibly expired
    /// * `Ok(None)` - No token found with given hash
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Find the refresh token currently held by a user
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete a refresh token by id
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token did not exist
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Delete every refresh token owned by a user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    async fn delete_by_user_id(&self, user_id: i64) -> Result<usize, DomainError>;
}
