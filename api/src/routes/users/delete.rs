use actix_web::{web, HttpResponse};

use crate::handlers::ApiError;
use crate::middleware::auth::OptionalAuth;

use sp_core::domain::entities::RoleType;
use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};
use sp_core::services::authorize;

use super::AppState;

/// Handler for DELETE /api/v1/users/{id}
///
/// Admin only. Removes the user together with their refresh token.
///
/// ## Errors
/// - 401 Unauthorized: No valid access token
/// - 403 Forbidden: Caller is not an admin
/// - 404 Not Found: No user with that id
pub async fn delete_user<U, R, T>(
    state: web::Data<AppState<U, R, T>>,
    auth: OptionalAuth,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    let caller = authorize(auth.0.as_ref().map(|context| &context.0), &[RoleType::Admin])?;
    let user_id = path.into_inner();

    state.auth_service.delete_user(user_id).await?;
    tracing::info!(admin_id = caller.user_id, user_id, "User removed by admin");

    Ok(HttpResponse::NoContent().finish())
}
