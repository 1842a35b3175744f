use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{debug, info};

use crate::errors::ModelError;

/// Open a connection pool for `cfg`. A single attempt is made; the caller
/// decides what to do when the backend is unreachable.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    debug!(max = cfg.max_connections, timeout_secs = cfg.connect_timeout_secs, "connecting to database");
    let db = Database::connect(opt).await.map_err(|e| ModelError::Connect(e.to_string()))?;
    db.ping().await.map_err(|e| ModelError::Connect(e.to_string()))?;
    Ok(db)
}

/// Create missing tables and columns. Safe to run on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), ModelError> {
    migration::Migrator::up(db, None)
        .await
        .map_err(|e| ModelError::Schema(e.to_string()))?;
    info!("database schema ensured");
    Ok(())
}
