//! Shared wiring for API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::header,
    test, web,
};
use serde_json::{json, Value};

use sp_api::routes::AppState;
use sp_core::repositories::{
    MockRefreshTokenRepository, MockRoleRepository, MockUserRepository, UserRepository,
};
use sp_core::services::{AuthService, AuthServiceConfig, TokenService, TokenServiceConfig};
use sp_shared::config::JwtConfig;

pub type TestState = AppState<MockUserRepository, MockRoleRepository, MockRefreshTokenRepository>;

pub const PASSWORD: &str = "pw123456";

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub tokens: Arc<MockRefreshTokenRepository>,
    pub token_service: Arc<TokenService<MockRefreshTokenRepository>>,
}

impl TestContext {
    pub async fn user_id(&self, username: &str) -> i64 {
        self.users
            .find_by_username(username)
            .await
            .unwrap()
            .expect("user should exist")
            .id
    }
}

pub fn context_with(config: AuthServiceConfig) -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::seeded());
    let tokens = Arc::new(MockRefreshTokenRepository::new());

    let jwt = JwtConfig::new("api-integration-test-secret");
    let token_config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();
    let token_service = Arc::new(TokenService::new(tokens.clone(), token_config).unwrap());

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        roles,
        token_service.clone(),
        config,
    ));

    TestContext {
        state: web::Data::new(AppState::new(auth_service)),
        users,
        tokens,
        token_service,
    }
}

/// Mock-backed context with a cheap bcrypt cost
pub fn context() -> TestContext {
    context_with(AuthServiceConfig {
        bcrypt_cost: 4,
        revoke_refresh_token_on_logout: false,
    })
}

/// Builds the production app factory around the mock-backed state
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(sp_api::create_app(
            $ctx.state.clone(),
            &sp_shared::config::ServerConfig::default(),
            &sp_shared::config::CorsConfig::default(),
        ))
        .await
    };
}

pub fn register_request(username: &str, password: &str, roles: &[&str]) -> Request {
    let roles: Vec<Value> = roles.iter().map(|name| json!({ "name": name })).collect();
    test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "username": username, "password": password, "roles": roles }))
        .to_request()
}

pub fn login_request(username: &str, password: &str) -> Request {
    test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request()
}

pub fn refresh_request(refresh_token: &str) -> Request {
    test::TestRequest::post()
        .uri("/api/v1/auth/refresh-token")
        .set_json(json!({ "refreshToken": refresh_token }))
        .to_request()
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Registers an account and logs in, returning the login body
pub async fn register_and_login<S, B>(app: &S, username: &str, roles: &[&str]) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, register_request(username, PASSWORD, roles)).await;
    assert_eq!(resp.status(), 201, "registration of {} failed", username);

    let resp = test::call_service(app, login_request(username, PASSWORD)).await;
    assert_eq!(resp.status(), 200, "login of {} failed", username);
    test::read_body_json(resp).await
}
