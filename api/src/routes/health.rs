//! Liveness and dependency health

use actix_web::{web, HttpResponse};
use async_trait::async_trait;
use serde_json::json;

use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};
use sp_infra::DatabasePool;

use super::AppState;

/// A backing dependency `/health` reports on
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn is_healthy(&self) -> bool;
}

#[async_trait]
impl HealthProbe for DatabasePool {
    async fn is_healthy(&self) -> bool {
        matches!(self.health_check().await, Ok(true))
    }
}

/// 200 while the database answers, 503 once it does not
pub async fn health_check<U, R, T>(state: web::Data<AppState<U, R, T>>) -> HttpResponse
where
    U: UserRepository,
    R: RoleRepository,
    T: RefreshTokenRepository,
{
    let database_up = match &state.health_probe {
        Some(probe) => Some(probe.is_healthy().await),
        None => None,
    };

    let mut body = json!({
        "status": "healthy",
        "service": "sulpharma-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    if let Some(up) = database_up {
        body["database"] = json!(if up { "up" } else { "down" });
    }

    if database_up == Some(false) {
        body["status"] = json!("unhealthy");
        tracing::warn!("Health check failed: database unreachable");
        return HttpResponse::ServiceUnavailable().json(body);
    }
    HttpResponse::Ok().json(body)
}
