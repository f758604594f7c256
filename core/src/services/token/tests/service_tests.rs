//! Unit tests for token service

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockRefreshTokenRepository, RefreshTokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};
use sp_shared::config::MAX_TOKEN_EXPIRY_SECONDS;

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret-key-for-token-service".to_string(),
        algorithm: Algorithm::HS512,
        access_token_expiry_seconds: 60,
        refresh_token_expiry_seconds: 3600,
    }
}

fn create_service() -> (TokenService<MockRefreshTokenRepository>, Arc<MockRefreshTokenRepository>) {
    let repo = Arc::new(MockRefreshTokenRepository::new());
    let service = TokenService::new(repo.clone(), test_config()).unwrap();
    (service, repo)
}

#[test]
fn test_issued_token_verifies_with_subject() {
    let (service, _) = create_service();

    let token = service.issue_access_token("a@b.com").unwrap();
    assert_eq!(service.verify_access_token(&token), Some("a@b.com".to_string()));

    let claims = service.decode_access_token(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, 60);
}

#[test]
fn test_token_rejected_after_ttl() {
    let (service, _) = create_service();

    let issued_at = Utc::now() - Duration::seconds(61);
    let token = service.issue_access_token_at("a@b.com", issued_at).unwrap();

    assert!(matches!(
        service.decode_access_token(&token),
        Err(TokenError::TokenExpired)
    ));
    assert_eq!(service.verify_access_token(&token), None);
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let (service, _) = create_service();
    let mut other_config = test_config();
    other_config.jwt_secret = "a-completely-different-secret".to_string();
    let other = TokenService::new(Arc::new(MockRefreshTokenRepository::new()), other_config).unwrap();

    let token = other.issue_access_token("a@b.com").unwrap();

    assert!(matches!(
        service.decode_access_token(&token),
        Err(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_token_with_other_algorithm_unsupported() {
    let (service, _) = create_service();
    let claims = Claims::new("a@b.com", Utc::now(), Duration::seconds(60));
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(test_config().jwt_secret.as_bytes()),
    )
    .unwrap();

    assert!(matches!(
        service.decode_access_token(&token),
        Err(TokenError::UnsupportedToken)
    ));
}

#[test]
fn test_malformed_and_empty_tokens() {
    let (service, _) = create_service();

    assert!(matches!(
        service.decode_access_token("not.a.jwt"),
        Err(TokenError::MalformedToken)
    ));
    assert!(matches!(
        service.decode_access_token("   "),
        Err(TokenError::EmptyClaims)
    ));
    assert_eq!(service.verify_access_token(""), None);
}

#[test]
fn test_token_without_subject_has_empty_claims() {
    let (service, _) = create_service();
    let exp = (Utc::now() + Duration::seconds(60)).timestamp();

    let key = EncodingKey::from_secret(test_config().jwt_secret.as_bytes());
    let header = Header::new(Algorithm::HS512);

    let missing_sub = encode(&header, &json!({ "exp": exp }), &key).unwrap();
    assert!(matches!(
        service.decode_access_token(&missing_sub),
        Err(TokenError::EmptyClaims)
    ));

    let blank_sub = encode(&header, &json!({ "sub": "", "iat": 0, "exp": exp }), &key).unwrap();
    assert!(matches!(
        service.decode_access_token(&blank_sub),
        Err(TokenError::EmptyClaims)
    ));
}

#[test]
fn test_out_of_range_lifetimes_refused() {
    let mut config = test_config();
    config.refresh_token_expiry_seconds = i64::MAX / 1000;
    let result = TokenService::new(Arc::new(MockRefreshTokenRepository::new()), config);
    assert!(matches!(result, Err(DomainError::Internal { .. })));

    let mut config = test_config();
    config.access_token_expiry_seconds = 0;
    let result = TokenService::new(Arc::new(MockRefreshTokenRepository::new()), config);
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_longest_lifetime_issues_tokens() {
    let mut config = test_config();
    config.access_token_expiry_seconds = MAX_TOKEN_EXPIRY_SECONDS;
    config.refresh_token_expiry_seconds = MAX_TOKEN_EXPIRY_SECONDS;
    let service = TokenService::new(Arc::new(MockRefreshTokenRepository::new()), config).unwrap();

    let token = service.issue_access_token("a@b.com").unwrap();
    assert_eq!(service.verify_access_token(&token), Some("a@b.com".to_string()));

    let raw = service.create_refresh_token(7).await.unwrap();
    assert!(service.redeem_refresh_token(&raw).await.is_ok());
}

#[test]
fn test_non_hmac_algorithm_refused() {
    let mut config = test_config();
    config.algorithm = Algorithm::RS256;

    let result = TokenService::new(Arc::new(MockRefreshTokenRepository::new()), config);
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_refresh_token_stored_as_digest() {
    let (service, repo) = create_service();

    let raw = service.create_refresh_token(7).await.unwrap();
    let stored = repo.find_by_user_id(7).await.unwrap().unwrap();

    assert_ne!(stored.token_hash, raw);
    assert_eq!(stored.token_hash, TokenService::<MockRefreshTokenRepository>::hash_token(&raw));
    assert_eq!(stored.token_hash.len(), 64);
}

#[tokio::test]
async fn test_refresh_token_redeemable_repeatedly_until_expiry() {
    let (service, _) = create_service();
    let raw = service.create_refresh_token(7).await.unwrap();

    let first = service.redeem_refresh_token(&raw).await.unwrap();
    let second = service.redeem_refresh_token(&raw).await.unwrap();

    assert_eq!(first.user_id, 7);
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn test_expired_refresh_token_removed_then_unknown() {
    let (service, repo) = create_service();
    let raw = service.create_refresh_token(7).await.unwrap();
    repo.expire_user_token(7).await;

    let result = service.redeem_refresh_token(&raw).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::RefreshTokenExpired { .. }))
    ));
    assert!(repo.find_by_user_id(7).await.unwrap().is_none());

    let result = service.redeem_refresh_token(&raw).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::RefreshTokenNotFound { .. }))
    ));
}

#[tokio::test]
async fn test_new_refresh_token_replaces_previous() {
    let (service, _) = create_service();

    let old = service.create_refresh_token(7).await.unwrap();
    let new = service.create_refresh_token(7).await.unwrap();
    assert_ne!(old, new);

    assert!(service.redeem_refresh_token(&old).await.is_err());
    assert!(service.redeem_refresh_token(&new).await.is_ok());
}

#[tokio::test]
async fn test_delete_user_tokens() {
    let (service, _) = create_service();
    let raw = service.create_refresh_token(7).await.unwrap();

    assert_eq!(service.delete_user_tokens(7).await.unwrap(), 1);
    assert!(service.redeem_refresh_token(&raw).await.is_err());
}
