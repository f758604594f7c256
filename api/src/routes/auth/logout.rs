use actix_web::{web, HttpResponse};

use crate::handlers::handle_domain_error;
use crate::middleware::auth::OptionalAuth;

use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Always answers 200 with `{"message": "logout successfully"}`, with or
/// without a valid access token. Access tokens stay usable until they
/// expire.
pub async fn logout<U, R, T>(
    state: web::Data<AppState<U, R, T>>,
    auth: OptionalAuth,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let identity = auth.0.as_ref().map(|context| &context.0);

    match state.auth_service.logout(identity).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
