//! Main token service implementation

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use sp_shared::config::MAX_TOKEN_EXPIRY_SECONDS;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RefreshTokenRepository;

use super::config::{is_hmac, TokenServiceConfig};

/// Service for signing access tokens and managing refresh tokens
pub struct TokenService<R: RefreshTokenRepository> {
    pub(crate) repository: Arc<R>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: RefreshTokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or an internal error when the configured
    /// algorithm is not an HMAC algorithm or a lifetime is out of range
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if !is_hmac(config.algorithm) {
            return Err(DomainError::Internal {
                message: format!("Unsupported JWT algorithm: {:?}", config.algorithm),
            });
        }
        if !config.has_valid_expiry() {
            return Err(DomainError::Internal {
                message: format!(
                    "Token lifetimes must be between 1 and {} seconds",
                    MAX_TOKEN_EXPIRY_SECONDS
                ),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn access_token_ttl(&self) -> Duration {
        Duration::seconds(self.config.access_token_expiry_seconds)
    }

    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::seconds(self.config.refresh_token_expiry_seconds)
    }

    /// Signs an access token for `subject` valid from now
    pub fn issue_access_token(&self, subject: &str) -> Result<String, DomainError> {
        self.issue_access_token_at(subject, Utc::now())
    }

    /// Signs an access token as if issued at `issued_at`
    pub fn issue_access_token_at(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new(subject, issued_at, self.access_token_ttl());
        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            TokenError::TokenGenerationFailed.into()
        })
    }

    /// Decodes and validates an access token, reporting why it was rejected
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::EmptyClaims);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| classify_jwt_error(e.kind()))?;

        if data.claims.sub.trim().is_empty() {
            return Err(TokenError::EmptyClaims);
        }
        Ok(data.claims)
    }

    /// Verifies an access token and returns its subject
    ///
    /// Every failure is logged with its cause and collapsed to `None`.
    pub fn verify_access_token(&self, token: &str) -> Option<String> {
        match self.decode_access_token(token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                tracing::warn!(reason = %e, "Access token rejected");
                None
            }
        }
    }

    /// Creates a refresh token for the user, replacing any previous one
    ///
    /// # Returns
    ///
    /// The raw token value; only its digest is stored
    pub async fn create_refresh_token(&self, user_id: i64) -> Result<String, DomainError> {
        let raw = Uuid::new_v4().to_string();
        let token = RefreshToken::new(user_id, Self::hash_token(&raw), self.refresh_token_ttl());

        self.repository.save_for_user(token).await?;
        tracing::debug!(user_id, "Refresh token stored");
        Ok(raw)
    }

    /// Looks up a presented refresh token and checks its expiry
    ///
    /// An expired token is deleted before the error is returned, so a second
    /// attempt reports it as unknown.
    pub async fn redeem_refresh_token(&self, raw: &str) -> Result<RefreshToken, DomainError> {
        let token_hash = Self::hash_token(raw);

        let token = self
            .repository
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| TokenError::RefreshTokenNotFound {
                token: raw.to_string(),
            })?;

        if token.is_expired() {
            self.repository.delete(token.id).await?;
            tracing::info!(user_id = token.user_id, "Expired refresh token removed");
            return Err(TokenError::RefreshTokenExpired {
                token: raw.to_string(),
            }
            .into());
        }

        Ok(token)
    }

    /// Deletes every refresh token owned by the user
    pub async fn delete_user_tokens(&self, user_id: i64) -> Result<usize, DomainError> {
        let deleted = self.repository.delete_by_user_id(user_id).await?;
        tracing::debug!(user_id, deleted, "Refresh tokens deleted");
        Ok(deleted)
    }

    /// SHA-256 hex digest used as the storage key for refresh tokens
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

fn classify_jwt_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::UnsupportedToken
        }
        ErrorKind::MissingRequiredClaim(_) => TokenError::EmptyClaims,
        _ => TokenError::MalformedToken,
    }
}
