//! Backend entry-point: loads settings, prepares the database and serves the
//! REST API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use matjip::inbound::http::health::HealthState;
use matjip::outbound::persistence::{DbPool, run_pending_migrations};
use matjip::outbound::token::{BuildMode, token_secret_from_env};
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let token_ttl = settings.token_ttl().map_err(std::io::Error::other)?;
    let pool_config = settings.pool_config().map_err(std::io::Error::other)?;

    let token_secret = token_secret_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    if token_secret.is_ephemeral() {
        warn!("using ephemeral token secret; issued tokens will not survive a restart");
    }
    info!(fingerprint = %token_secret.fingerprint(), "token secret loaded");

    let database_url = pool_config.database_url().to_owned();
    let applied = web::block(move || run_pending_migrations(&database_url))
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");

    let db_pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, db_pool, token_secret, token_ttl);
    info!(%bind_addr, "starting HTTP server");
    let server = create_server(health_state, config)?;
    server.await
}
