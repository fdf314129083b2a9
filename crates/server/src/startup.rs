use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, LogFormat, ServerConfig};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::utils::logging;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Initialize logging via shared common utils
pub fn init_logging(cfg: &AppConfig) {
    logging::init_logging(cfg.logging.format == LogFormat::Json);
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}:{}: {e}", server.host, server.port)))
}

/// Apply pending migrations when the config asks for it.
pub async fn prepare_database(db: &DatabaseConnection, cfg: &AppConfig) -> Result<(), StartupError> {
    if !cfg.database.run_migrations {
        info!("skipping migrations (database.run_migrations = false)");
        return Ok(());
    }
    Migrator::up(db, None).await.map_err(|e| StartupError::Migration(e.to_string()))?;
    info!("migrations applied");
    Ok(())
}

/// Router with the production CORS policy over an existing connection.
pub fn app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState { db }, build_cors())
}

/// Public entry: load config, connect, migrate and serve until the task is dropped.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    init_logging(&cfg);

    let db = models::db::connect_with_config(&cfg.database).await?;
    prepare_database(&db, &cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting pizzeria server");
    axum::serve(listener, app(db)).await?;
    Ok(())
}
