//! MySQL implementation of the UserRepository trait.
//!
//! Users and their role assignments live in `users` and `user_roles`;
//! every lookup returns the user with its roles loaded.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sp_core::domain::entities::{Role, User};
use sp_core::errors::{AuthError, DomainError};
use sp_core::repositories::UserRepository;

use super::role_repository_impl::MySqlRoleRepository;
use super::{db_error, is_unique_violation};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn load_roles(&self, user_id: i64) -> Result<Vec<Role>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = ?
            ORDER BY r.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load user roles", e))?;

        rows.iter().map(MySqlRoleRepository::row_to_role).collect()
    }

    /// Convert a `users` row plus its roles into a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow, roles: Vec<Role>) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| db_error("Failed to get id", e))?,
            username: row
                .try_get("username")
                .map_err(|e| db_error("Failed to get username", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("Failed to get password_hash", e))?,
            roles,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }

    async fn hydrate(&self, row: Option<sqlx::mysql::MySqlRow>) -> Result<Option<User>, DomainError> {
        match row {
            Some(row) => {
                let id: i64 = row
                    .try_get("id")
                    .map_err(|e| db_error("Failed to get id", e))?;
                let roles = self.load_roles(id).await?;
                Ok(Some(Self::row_to_user(&row, roles)?))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find user by id", e))?;

        self.hydrate(row).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find user by username", e))?;

        self.hydrate(row).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check username", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| db_error("Failed to get count", e))?;
        Ok(count > 0)
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await;

        let result = match result {
            Ok(result) => result,
            // The existence check and this insert can race
            Err(e) if is_unique_violation(&e) => return Err(AuthError::UserAlreadyExists.into()),
            Err(e) => return Err(db_error("Failed to create user", e)),
        };
        user.id = result.last_insert_id() as i64;

        for role in &user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)")
                .bind(user.id)
                .bind(role.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| db_error("Failed to assign role", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit user", e))?;

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        // user_roles and refresh_tokens rows cascade
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
