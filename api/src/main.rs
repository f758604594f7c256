use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use sp_api::config::Config;
use sp_api::telemetry::init_tracing;
use sp_api::{create_app, AppState};
use sp_core::services::{AuthService, AuthServiceConfig, TokenService, TokenServiceConfig};
use sp_infra::{DatabasePool, MySqlRefreshTokenRepository, MySqlRoleRepository, MySqlUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environments set variables directly
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&config.logging);
    config.validate()?;

    tracing::info!(environment = %config.environment, "Starting Sulpharma API server");

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let role_repository = Arc::new(MySqlRoleRepository::new(pool.get_pool().clone()));
    let token_repository = Arc::new(MySqlRefreshTokenRepository::new(pool.get_pool().clone()));

    let token_config = TokenServiceConfig::from_jwt_config(&config.auth.jwt)?;
    let token_service = Arc::new(TokenService::new(token_repository, token_config)?);
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        role_repository,
        token_service,
        AuthServiceConfig::from(&config.auth),
    ));

    auth_service.seed_roles().await?;

    let app_state =
        web::Data::new(AppState::new(auth_service).with_health_probe(Arc::new(pool.clone())));
    let server_config = config.server.clone();
    let cors_config = config.cors.clone();
    let bind_address = config.server.bind_address();

    tracing::info!(address = %bind_address, "Binding HTTP server");

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &server_config, &cors_config)
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
