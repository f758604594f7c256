use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{validation_failure, RefreshTokenRequest};
use crate::handlers::handle_domain_error;

use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/refresh-token
///
/// Issues a new access token for the owner of a stored refresh token. The
/// refresh token itself is not rotated and comes back unchanged.
///
/// # Request Body
///
/// ```json
/// {
///     "refreshToken": "1b4e28ba-2fa1-11d2-883f-0016d3cca427"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or blank `refreshToken`
/// - 403 Forbidden: Token unknown, or expired (an expired token is deleted)
pub async fn refresh_token<U, R, T>(
    state: web::Data<AppState<U, R, T>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(&validation_failure(&errors));
    }

    match state.auth_service.refresh_token(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
