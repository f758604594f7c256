//! Application factory
//!
//! Builds the actix-web `App` from already-wired services so the binary and
//! the integration tests run exactly the same routing and middleware.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::handlers::ApiError;
use crate::middleware::{cors::create_cors, IdentityResolver, JwtAuth};
use crate::routes::auth::{login::login, logout::logout, me::me, refresh::refresh_token, register::register};
use crate::routes::health::health_check;
use crate::routes::users::delete::delete_user;
use crate::routes::AppState;

use sp_core::errors::DomainError;
use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};
use sp_shared::config::{CorsConfig, ServerConfig};

/// Create and configure the application with all dependencies
pub fn create_app<U, R, T>(
    app_state: web::Data<AppState<U, R, T>>,
    server: &ServerConfig,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let resolver: Arc<dyn IdentityResolver> = app_state.auth_service.clone();

    // Malformed bodies and path segments are client errors with the usual body
    let json_config = web::JsonConfig::default()
        .limit(server.max_payload_size)
        .error_handler(|err, _req| {
            ApiError(DomainError::Validation {
                message: err.to_string(),
            })
            .into()
        });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        ApiError(DomainError::Validation {
            message: err.to_string(),
        })
        .into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(path_config)
        // Last wrap runs first: request span, then CORS
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<U, R, T>))
        .service(
            web::scope("/api/v1")
                .wrap(JwtAuth::new(resolver))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, R, T>))
                        .route("/login", web::post().to(login::<U, R, T>))
                        .route("/refresh-token", web::post().to(refresh_token::<U, R, T>))
                        .route("/me", web::get().to(me))
                        .route("/logout", web::post().to(logout::<U, R, T>)),
                )
                .service(
                    web::scope("/users")
                        .route("/{id}", web::delete().to(delete_user::<U, R, T>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": sp_shared::error_codes::NOT_FOUND,
        "message": "The requested resource was not found"
    }))
}
