//! HTTP route handlers grouped by resource

pub mod auth;
pub mod health;
pub mod users;

use std::sync::Arc;

use sp_core::repositories::{RefreshTokenRepository, RoleRepository, UserRepository};
use sp_core::services::AuthService;

use health::HealthProbe;

/// Application state that holds shared services
pub struct AppState<U, R, T>
where
    U: UserRepository,
    R: RoleRepository,
    T: RefreshTokenRepository,
{
    pub auth_service: Arc<AuthService<U, R, T>>,
    /// Consulted by `/health`; absent means only liveness is reported
    pub health_probe: Option<Arc<dyn HealthProbe>>,
}

impl<U, R, T> AppState<U, R, T>
where
    U: UserRepository,
    R: RoleRepository,
    T: RefreshTokenRepository,
{
    pub fn new(auth_service: Arc<AuthService<U, R, T>>) -> Self {
        Self {
            auth_service,
            health_probe: None,
        }
    }

    pub fn with_health_probe(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.health_probe = Some(probe);
        self
    }
}
