#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Migrated SQLite database living in its own temp directory.
pub struct TestDb {
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub async fn get_db() -> Result<TestDb, anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("service_test.db");
    let mut cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    cfg.max_connections = 4;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(TestDb { db, _dir: dir })
}
