//! User entity backing the credential store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::{Role, RoleType};

/// A registered account.
///
/// `id` is assigned by the store; a freshly built `User` carries `0` until
/// it has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Email-shaped login name, unique across users
    pub username: String,

    /// bcrypt hash, never the raw password
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub roles: Vec<Role>,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user that has not been persisted yet
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password_hash: password_hash.into(),
            roles,
            created_at: Utc::now(),
        }
    }

    pub fn has_role(&self, role: RoleType) -> bool {
        self.roles.iter().any(|r| r.name == role)
    }

    pub fn role_types(&self) -> Vec<RoleType> {
        self.roles.iter().map(|r| r.name).collect()
    }
}
