//! Authenticated identity attached to a request.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{RoleType, User};

/// Who the caller is, as established from a verified access token and the
/// credential store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub roles: Vec<RoleType>,
}

impl Identity {
    pub fn has_role(&self, role: RoleType) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(RoleType::Admin)
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            roles: user.role_types(),
        }
    }
}
