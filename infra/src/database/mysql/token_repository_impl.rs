//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! `refresh_tokens.user_id` is UNIQUE, so saving a token for a user who
//! already holds one overwrites that row in a single statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sp_core::domain::entities::RefreshToken;
use sp_core::errors::DomainError;
use sp_core::repositories::RefreshTokenRepository;

use super::db_error;

/// MySQL implementation of RefreshTokenRepository
pub struct MySqlRefreshTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    /// Create a new MySQL refresh token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        Ok(RefreshToken {
            id: row
                .try_get("id")
                .map_err(|e| db_error("Failed to get id", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| db_error("Failed to get user_id", e))?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| db_error("Failed to get token_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| db_error("Failed to get expires_at", e))?,
        })
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn save_for_user(&self, mut token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (user_id, token_hash, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = LAST_INSERT_ID(id),
                token_hash = VALUES(token_hash),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at)
        "#;

        let result = sqlx::query(query)
            .bind(token.user_id)
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save refresh token", e))?;

        token.id = result.last_insert_id() as i64;
        Ok(token)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find refresh token", e))?;

        result.as_ref().map(Self::row_to_token).transpose()
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM refresh_tokens
            WHERE user_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user refresh token", e))?;

        result.as_ref().map(Self::row_to_token).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete refresh token", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user_id(&self, user_id: i64) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete user refresh tokens", e))?;

        Ok(result.rows_affected() as usize)
    }
}
