//! Access guard middleware.
//!
//! Reads `Authorization: Bearer <token>`, resolves it to an `Identity` and
//! stores that identity in the request extensions. The middleware never
//! rejects a request itself: a missing or bad token simply leaves the request
//! anonymous, and handlers that need a caller ask for `AuthContext`, which
//! fails with 401 when no identity was attached.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    sync::Arc,
};

use sp_core::domain::value_objects::Identity;
use sp_core::errors::DomainError;
use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};
use sp_core::services::AuthService;

use crate::handlers::ApiError;

/// Turns a bearer token into the caller's identity
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// `None` when the token is invalid or its subject is unknown
    async fn resolve(&self, token: &str) -> Option<Identity>;
}

#[async_trait]
impl<U, R, T> IdentityResolver for AuthService<U, R, T>
where
    U: UserRepository,
    R: RoleRepository,
    T: RefreshTokenRepository,
{
    async fn resolve(&self, token: &str) -> Option<Identity> {
        match self.authenticate(token).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::error!(error = %e, "Failed to resolve access token");
                None
            }
        }
    }
}

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext(pub Identity);

impl Deref for AuthContext {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    resolver: Arc<dyn IdentityResolver>,
}

impl JwtAuth {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { resolver }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            resolver: Arc::clone(&self.resolver),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    resolver: Arc<dyn IdentityResolver>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let resolver = Arc::clone(&self.resolver);

        Box::pin(async move {
            if let Some(token) = extract_bearer_token(&req) {
                match resolver.resolve(&token).await {
                    Some(identity) => {
                        tracing::debug!(user_id = identity.user_id, "Request authenticated");
                        req.extensions_mut().insert(AuthContext(identity));
                    }
                    None => tracing::debug!("Bearer token rejected; continuing anonymously"),
                }
            }

            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
pub fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or(ApiError(DomainError::Unauthorized));

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
