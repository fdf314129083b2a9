use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::db::connect_with_config;

/// Keeps the temp directory alive as long as the connection is used.
pub struct TestDb {
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub fn sqlite_config(dir: &TempDir) -> DatabaseConfig {
    let path = dir.path().join("models_test.db");
    let mut cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    cfg.max_connections = 4;
    cfg
}

pub async fn setup_test_db() -> Result<TestDb> {
    let dir = tempfile::tempdir()?;
    let db = connect_with_config(&sqlite_config(&dir)).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(TestDb { db, _dir: dir })
}
