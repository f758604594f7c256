//! User repository trait defining the interface for the credential store.
//!
//! The trait is async-first and keeps the domain layer independent of the
//! database; the MySQL implementation lives in the infrastructure crate.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Users are always returned with their full role set loaded.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by numeric id
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by username (exact match)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a username is already taken
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    /// Persist a new user together with its role assignments
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user with its assigned id
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Username taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user by id
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - No such user
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
