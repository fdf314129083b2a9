use std::env;

use configs::DatabaseConfig;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL")
        .or_else(|_| env::var("DB_URI"))
        .unwrap_or_else(|_| configs::DEFAULT_DATABASE_URL.to_string())
});

/// Connect using `config.toml` when it loads, otherwise `DATABASE_URL` with pool defaults.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.database,
        Err(_) => DatabaseConfig::with_url(DATABASE_URL.as_str()),
    };
    connect_with_config(&cfg).await
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.acquire_timeout())
        .idle_timeout(cfg.idle_timeout())
        .max_lifetime(cfg.max_lifetime())
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}
