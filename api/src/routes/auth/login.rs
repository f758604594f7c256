use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{validation_failure, LoginRequest};
use crate::handlers::handle_domain_error;

use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "username": "someone@mail.com",
///     "accessToken": "eyJ...",
///     "refreshToken": "1b4e28ba-2fa1-11d2-883f-0016d3cca427"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed body or failed field validation
/// - 401 Unauthorized: Unknown username or wrong password
pub async fn login<U, R, T>(
    state: web::Data<AppState<U, R, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(&validation_failure(&errors));
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
