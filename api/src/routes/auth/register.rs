use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{validation_failure, RegisterRequest};
use crate::handlers::handle_domain_error;

use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates an account. `roles` may be omitted, in which case the account
/// is a customer.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "someone@mail.com",
///     "password": "secret123",
///     "roles": [{ "name": "CUSTOMER" }]
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// Empty body.
///
/// ## Errors
/// - 400 Bad Request: Malformed body or failed field validation
/// - 409 Conflict: Username already registered
/// - 500 Internal Server Error: A requested role is missing from the role store
pub async fn register<U, R, T>(
    state: web::Data<AppState<U, R, T>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(&validation_failure(&errors));
    }

    let roles = request.role_types();
    match state
        .auth_service
        .register(&request.username, &request.password, &roles)
        .await
    {
        Ok(_) => HttpResponse::Created().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
