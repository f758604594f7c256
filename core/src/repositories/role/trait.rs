//! Role repository trait.

use async_trait::async_trait;

use crate::domain::entities::role::{Role, RoleType};
use crate::errors::DomainError;

/// Repository trait for the fixed set of roles
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by name
    async fn find_by_name(&self, name: RoleType) -> Result<Option<Role>, DomainError>;

    /// All stored roles
    async fn find_all(&self) -> Result<Vec<Role>, DomainError>;

    /// Insert a role; inserting an existing name returns the stored row
    async fn create(&self, name: RoleType) -> Result<Role, DomainError>;
}
