//! Mock implementation of RoleRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::role::{Role, RoleType};
use crate::errors::DomainError;

use super::r#trait::RoleRepository;

/// Mock role repository, empty until roles are created or seeded
pub struct MockRoleRepository {
    roles: Arc<RwLock<Vec<Role>>>,
}

impl MockRoleRepository {
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Repository pre-populated with every role
    pub fn seeded() -> Self {
        let roles = RoleType::ALL
            .iter()
            .enumerate()
            .map(|(i, name)| Role::new(i as i64 + 1, *name))
            .collect();
        Self {
            roles: Arc::new(RwLock::new(roles)),
        }
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn find_by_name(&self, name: RoleType) -> Result<Option<Role>, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.iter().find(|r| r.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Role>, DomainError> {
        Ok(self.roles.read().await.clone())
    }

    async fn create(&self, name: RoleType) -> Result<Role, DomainError> {
        let mut roles = self.roles.write().await;
        if let Some(existing) = roles.iter().find(|r| r.name == name) {
            return Ok(existing.clone());
        }
        let role = Role::new(roles.len() as i64 + 1, name);
        roles.push(role.clone());
        Ok(role)
    }
}
