//! Unit tests for the authentication flow

use crate::domain::entities::RoleType;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockRoleRepository, RefreshTokenRepository, RoleRepository, UserRepository};
use crate::services::auth::LOGOUT_MESSAGE;

use super::fixtures::{auth_config, create_context, create_context_with};

const USERNAME: &str = "a@b.com";
const PASSWORD: &str = "pw123456";

#[tokio::test]
async fn test_register_stores_hashed_password_and_requested_roles() {
    let ctx = create_context();

    let user = ctx
        .service
        .register(USERNAME, PASSWORD, &[RoleType::Customer])
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_ne!(user.password_hash, PASSWORD);
    assert_eq!(user.role_types(), vec![RoleType::Customer]);
    assert!(ctx.users.find_by_username(USERNAME).await.unwrap().is_some());
}

#[tokio::test]
async fn test_register_without_roles_stores_none() {
    let ctx = create_context();

    let user = ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();

    assert!(user.role_types().is_empty());
    assert!(ctx.service.login(USERNAME, PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_register_with_duplicate_roles_assigns_each_once() {
    let ctx = create_context();

    let user = ctx
        .service
        .register(
            USERNAME,
            PASSWORD,
            &[RoleType::Admin, RoleType::Customer, RoleType::Admin],
        )
        .await
        .unwrap();

    assert_eq!(user.roles.len(), 2);
    assert!(user.has_role(RoleType::Admin));
}

#[tokio::test]
async fn test_register_same_username_twice_conflicts() {
    let ctx = create_context();

    ctx.service
        .register(USERNAME, PASSWORD, &[RoleType::Customer])
        .await
        .unwrap();
    let result = ctx
        .service
        .register(USERNAME, "another-password", &[RoleType::Customer])
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(ctx.users.len().await, 1);
}

#[tokio::test]
async fn test_register_with_missing_role_fails_without_storing_user() {
    let ctx = create_context_with(MockRoleRepository::new(), auth_config());

    let result = ctx
        .service
        .register(USERNAME, PASSWORD, &[RoleType::Customer])
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::RoleNotFound { ref role })) if role == "CUSTOMER"
    ));
    assert!(ctx.users.is_empty().await);
}

#[tokio::test]
async fn test_login_returns_verifiable_tokens() {
    let ctx = create_context();
    ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();

    let response = ctx.service.login(USERNAME, PASSWORD).await.unwrap();

    assert_eq!(response.username, USERNAME);
    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(
        ctx.token_service.verify_access_token(&response.access_token),
        Some(USERNAME.to_string())
    );
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let ctx = create_context();
    ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();

    let wrong_password = ctx.service.login(USERNAME, "wrong-password").await;
    let unknown_user = ctx.service.login("nobody@b.com", PASSWORD).await;

    for result in [wrong_password, unknown_user] {
        match result {
            Err(DomainError::Auth(AuthError::InvalidCredentials)) => {}
            other => panic!("expected invalid credentials, got {:?}", other),
        }
    }
    assert!(ctx.tokens.is_empty().await);
}

#[tokio::test]
async fn test_only_latest_login_refresh_token_is_redeemable() {
    let ctx = create_context();
    ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();

    let first = ctx.service.login(USERNAME, PASSWORD).await.unwrap();
    let second = ctx.service.login(USERNAME, PASSWORD).await.unwrap();

    let stale = ctx.service.refresh_token(&first.refresh_token).await;
    assert!(matches!(
        stale,
        Err(DomainError::Token(TokenError::RefreshTokenNotFound { .. }))
    ));
    assert!(ctx.service.refresh_token(&second.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_refresh_echoes_refresh_token_and_can_repeat() {
    let ctx = create_context();
    ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();
    let login = ctx.service.login(USERNAME, PASSWORD).await.unwrap();

    let first = ctx.service.refresh_token(&login.refresh_token).await.unwrap();
    let second = ctx.service.refresh_token(&login.refresh_token).await.unwrap();

    assert_eq!(first.refresh_token, login.refresh_token);
    assert_eq!(second.refresh_token, login.refresh_token);
    assert_eq!(first.username, USERNAME);
    assert_eq!(
        ctx.token_service.verify_access_token(&second.access_token),
        Some(USERNAME.to_string())
    );
}

#[tokio::test]
async fn test_refresh_with_expired_token_removes_it() {
    let ctx = create_context();
    let user = ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();
    let login = ctx.service.login(USERNAME, PASSWORD).await.unwrap();
    ctx.tokens.expire_user_token(user.id).await;

    let expired = ctx.service.refresh_token(&login.refresh_token).await;
    match expired {
        Err(err @ DomainError::Token(TokenError::RefreshTokenExpired { .. })) => {
            assert_eq!(
                err.to_string(),
                format!(
                    "Failed for [{}]: Refresh token was expired. Please make a new signin request",
                    login.refresh_token
                )
            );
        }
        other => panic!("expected expired refresh token, got {:?}", other),
    }
    assert!(ctx.tokens.find_by_user_id(user.id).await.unwrap().is_none());

    let again = ctx.service.refresh_token(&login.refresh_token).await;
    assert!(matches!(
        again,
        Err(DomainError::Token(TokenError::RefreshTokenNotFound { .. }))
    ));
}

#[tokio::test]
async fn test_refresh_with_unknown_token() {
    let ctx = create_context();

    let result = ctx.service.refresh_token("never-issued").await;
    match result {
        Err(err) => assert_eq!(
            err.to_string(),
            "Failed for [never-issued]: Refresh token is not in database!"
        ),
        Ok(_) => panic!("unknown refresh token must be rejected"),
    }
}

#[tokio::test]
async fn test_authenticate_resolves_identity_with_roles() {
    let ctx = create_context();
    let user = ctx
        .service
        .register(USERNAME, PASSWORD, &[RoleType::Admin])
        .await
        .unwrap();
    let login = ctx.service.login(USERNAME, PASSWORD).await.unwrap();

    let identity = ctx
        .service
        .authenticate(&login.access_token)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.username, USERNAME);
    assert!(identity.is_admin());
}

#[tokio::test]
async fn test_authenticate_rejects_bad_token_and_deleted_subject() {
    let ctx = create_context();
    let user = ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();
    let login = ctx.service.login(USERNAME, PASSWORD).await.unwrap();

    assert!(ctx.service.authenticate("garbage").await.unwrap().is_none());

    ctx.users.delete(user.id).await.unwrap();
    assert!(ctx
        .service
        .authenticate(&login.access_token)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_logout_keeps_refresh_token_by_default() {
    let ctx = create_context();
    ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();
    let login = ctx.service.login(USERNAME, PASSWORD).await.unwrap();
    let identity = ctx
        .service
        .authenticate(&login.access_token)
        .await
        .unwrap();

    let response = ctx.service.logout(identity.as_ref()).await.unwrap();
    assert_eq!(response.message, LOGOUT_MESSAGE);

    assert!(ctx.service.refresh_token(&login.refresh_token).await.is_ok());

    let anonymous = ctx.service.logout(None).await.unwrap();
    assert_eq!(anonymous.message, "logout successfully");
}

#[tokio::test]
async fn test_logout_revokes_refresh_token_when_enabled() {
    let mut config = auth_config();
    config.revoke_refresh_token_on_logout = true;
    let ctx = create_context_with(MockRoleRepository::seeded(), config);

    ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();
    let login = ctx.service.login(USERNAME, PASSWORD).await.unwrap();
    let identity = ctx
        .service
        .authenticate(&login.access_token)
        .await
        .unwrap();

    ctx.service.logout(identity.as_ref()).await.unwrap();

    assert!(ctx.service.refresh_token(&login.refresh_token).await.is_err());
}

#[tokio::test]
async fn test_delete_user_removes_refresh_tokens() {
    let ctx = create_context();
    let user = ctx.service.register(USERNAME, PASSWORD, &[]).await.unwrap();
    let login = ctx.service.login(USERNAME, PASSWORD).await.unwrap();

    ctx.service.delete_user(user.id).await.unwrap();

    assert!(ctx.users.find_by_id(user.id).await.unwrap().is_none());
    assert!(ctx.tokens.is_empty().await);
    assert!(ctx.service.refresh_token(&login.refresh_token).await.is_err());

    let missing = ctx.service.delete_user(user.id).await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_seed_roles_is_idempotent() {
    let ctx = create_context_with(MockRoleRepository::new(), auth_config());

    let created = ctx.service.seed_roles().await.unwrap();
    assert_eq!(created, vec![RoleType::Customer, RoleType::Admin]);

    let created_again = ctx.service.seed_roles().await.unwrap();
    assert!(created_again.is_empty());
    assert_eq!(ctx.roles.find_all().await.unwrap().len(), 2);

    assert!(ctx.service.register(USERNAME, PASSWORD, &[]).await.is_ok());
}
