use actix_web::{http::header::ContentType, HttpResponse};

use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/me
///
/// Responds with the caller's username as plain text, or 401 when the
/// request carries no valid access token.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(auth.username.clone())
}
