//! Role entity and the closed set of role names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role names known to the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleType {
    Customer,
    Admin,
}

impl RoleType {
    /// Every role, in seeding order
    pub const ALL: [RoleType; 2] = [RoleType::Customer, RoleType::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Customer => "CUSTOMER",
            RoleType::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CUSTOMER" => Ok(RoleType::Customer),
            "ADMIN" => Ok(RoleType::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Persisted role record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: RoleType,
}

impl Role {
    pub fn new(id: i64, name: RoleType) -> Self {
        Self { id, name }
    }
}
