//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::{Role, RoleType, User};
use crate::domain::value_objects::{Identity, JwtResponse, MessageResponse};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Acknowledgement returned by logout
pub const LOGOUT_MESSAGE: &str = "logout successfully";

/// Authentication service for managing the complete authentication flow
pub struct AuthService<U, R, T>
where
    U: UserRepository,
    R: RoleRepository,
    T: RefreshTokenRepository,
{
    /// Credential store
    user_repository: Arc<U>,
    /// Role lookup for registration and seeding
    role_repository: Arc<R>,
    /// Token service for JWT and refresh token management
    token_service: Arc<TokenService<T>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, R, T> AuthService<U, R, T>
where
    U: UserRepository,
    R: RoleRepository,
    T: RefreshTokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `role_repository` - Repository for role lookup
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        role_repository: Arc<R>,
        token_service: Arc<TokenService<T>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            token_service,
            config,
        }
    }

    /// Register a new user
    ///
    /// The user gets exactly the requested roles, so an empty slice yields an
    /// account with none. Every requested role must already exist in the
    /// role store.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(AuthError::UserAlreadyExists)` - Username taken
    /// * `Err(AuthError::RoleNotFound)` - A requested role is missing from the store
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        roles: &[RoleType],
    ) -> DomainResult<User> {
        if self.user_repository.exists_by_username(username).await? {
            tracing::info!(username, "Registration rejected: username taken");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let mut resolved: Vec<Role> = Vec::with_capacity(roles.len());
        for &role in roles {
            if resolved.iter().any(|r| r.name == role) {
                continue;
            }
            let stored = self
                .role_repository
                .find_by_name(role)
                .await?
                .ok_or_else(|| {
                    tracing::error!(role = %role, "Role missing from role store");
                    AuthError::RoleNotFound {
                        role: role.to_string(),
                    }
                })?;
            resolved.push(stored);
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let user = self
            .user_repository
            .create(User::new(username, password_hash, resolved))
            .await?;

        tracing::info!(user_id = user.id, roles = ?user.role_types(), "User registered");
        Ok(user)
    }

    /// Authenticate with username and password
    ///
    /// Unknown usernames and wrong passwords fail identically. On success a
    /// fresh refresh token replaces any the user held before.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<JwtResponse> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::info!("Login failed: unknown username");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(password, &user.password_hash).await? {
            tracing::info!(user_id = user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.issue_access_token(&user.username)?;
        let refresh_token = self.token_service.create_refresh_token(user.id).await?;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(JwtResponse::new(user.username, access_token, refresh_token))
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token itself is returned unchanged.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<JwtResponse> {
        let stored = self.token_service.redeem_refresh_token(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(stored.user_id)
            .await?
            .ok_or_else(|| TokenError::RefreshTokenNotFound {
                token: refresh_token.to_string(),
            })?;

        let access_token = self.token_service.issue_access_token(&user.username)?;
        tracing::debug!(user_id = user.id, "Access token refreshed");

        Ok(JwtResponse::new(
            user.username,
            access_token,
            refresh_token.to_string(),
        ))
    }

    /// Log out the caller
    ///
    /// Always succeeds. Access tokens stay valid until they expire; the
    /// refresh token is only deleted when revocation on logout is enabled.
    pub async fn logout(&self, identity: Option<&Identity>) -> DomainResult<MessageResponse> {
        if let Some(identity) = identity {
            if self.config.revoke_refresh_token_on_logout {
                self.token_service.delete_user_tokens(identity.user_id).await?;
            }
            tracing::info!(user_id = identity.user_id, "User logged out");
        }

        Ok(MessageResponse::new(LOGOUT_MESSAGE))
    }

    /// Resolve a bearer token into the caller's identity
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Identity))` - Token valid and its subject still exists
    /// * `Ok(None)` - Token rejected or subject unknown
    pub async fn authenticate(&self, token: &str) -> DomainResult<Option<Identity>> {
        let Some(username) = self.token_service.verify_access_token(token) else {
            return Ok(None);
        };

        match self.user_repository.find_by_username(&username).await? {
            Some(user) => Ok(Some(Identity::from(&user))),
            None => {
                tracing::warn!("Access token subject no longer exists");
                Ok(None)
            }
        }
    }

    /// Delete a user and every refresh token they own
    pub async fn delete_user(&self, user_id: i64) -> DomainResult<()> {
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: format!("User {}", user_id),
            });
        }

        let tokens = self.token_service.delete_user_tokens(user_id).await?;
        self.user_repository.delete(user_id).await?;

        tracing::info!(user_id, tokens, "User deleted");
        Ok(())
    }

    /// Insert every role missing from the role store
    ///
    /// # Returns
    ///
    /// The roles that were created by this call
    pub async fn seed_roles(&self) -> DomainResult<Vec<RoleType>> {
        let mut created = Vec::new();
        for role in RoleType::ALL {
            if self.role_repository.find_by_name(role).await?.is_none() {
                self.role_repository.create(role).await?;
                created.push(role);
            }
        }

        if !created.is_empty() {
            tracing::info!(roles = ?created, "Seeded roles");
        }
        Ok(created)
    }
}
