//! MySQL implementation of the RoleRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use sp_core::domain::entities::{Role, RoleType};
use sp_core::errors::DomainError;
use sp_core::repositories::RoleRepository;

use super::db_error;

/// MySQL implementation of RoleRepository
pub struct MySqlRoleRepository {
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub(crate) fn row_to_role(row: &sqlx::mysql::MySqlRow) -> Result<Role, DomainError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get role id", e))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| db_error("Failed to get role name", e))?;

        let name = name.parse::<RoleType>().map_err(|message| DomainError::Internal {
            message: format!("Corrupt role row {}: {}", id, message),
        })?;

        Ok(Role::new(id, name))
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn find_by_name(&self, name: RoleType) -> Result<Option<Role>, DomainError> {
        let result = sqlx::query("SELECT id, name FROM roles WHERE name = ? LIMIT 1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find role", e))?;

        result.as_ref().map(Self::row_to_role).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Role>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list roles", e))?;

        rows.iter().map(Self::row_to_role).collect()
    }

    async fn create(&self, name: RoleType) -> Result<Role, DomainError> {
        // LAST_INSERT_ID(id) makes an existing row report its own id
        let result = sqlx::query(
            r#"
            INSERT INTO roles (name) VALUES (?)
            ON DUPLICATE KEY UPDATE id = LAST_INSERT_ID(id)
            "#,
        )
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create role", e))?;

        Ok(Role::new(result.last_insert_id() as i64, name))
    }
}
