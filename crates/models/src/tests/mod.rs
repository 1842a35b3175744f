/// Schema creation and evolution tests against an in-memory SQLite database
pub mod schema_tests;

/// CRUD round trips through the entities
pub mod crud_tests;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// In-memory SQLite shares nothing between connections, so the pool is capped at one.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    Ok(crate::db::connect(&cfg).await?)
}
