use sea_orm::DatabaseConnection;

/// Shared by every handler; the pool is the only cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
