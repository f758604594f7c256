//! Mock implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository keyed by owning user
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<i64, RefreshToken>>>,
    next_id: AtomicI64,
}

impl MockRefreshTokenRepository {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Move the user's token expiry into the past
    pub async fn expire_user_token(&self, user_id: i64) -> bool {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(&user_id) {
            Some(token) => {
                token.expires_at = Utc::now() - Duration::seconds(1);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn save_for_user(&self, mut token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        token.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        tokens.insert(token.user_id, token.clone());
        Ok(token)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.token_hash == token_hash).cloned())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&user_id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| t.id != id);
        Ok(tokens.len() < before)
    }

    async fn delete_by_user_id(&self, user_id: i64) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(usize::from(tokens.remove(&user_id).is_some()))
    }
}
