#![cfg(test)]
use std::path::PathBuf;

use configs::DatabaseConfig;

use crate::auth::PasswordHasher;
use crate::storage::Storage;

/// Fresh, not yet created directory under the system temp dir.
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("vipcortes_data_{}", uuid::Uuid::new_v4()))
}

/// Cheap argon2 parameters so tests do not spend seconds hashing.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::with_cost(8, 1, 1).expect("valid argon2 params")
}

pub async fn file_storage() -> Result<(Storage, PathBuf), anyhow::Error> {
    let dir = temp_data_dir();
    let storage = Storage::file(&dir).await?;
    Ok((storage, dir))
}

/// Database mode on a private in-memory SQLite database. A single pooled
/// connection keeps the database alive for the whole test.
pub async fn sqlite_storage() -> Result<(Storage, PathBuf), anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = models::db::connect(&cfg).await?;
    models::db::ensure_schema(&db).await?;
    let dir = temp_data_dir();
    Ok((Storage::database(db, &dir), dir))
}

/// Both backends, so each scenario runs against file and database mode.
pub async fn both_storages() -> Result<Vec<(Storage, PathBuf)>, anyhow::Error> {
    Ok(vec![file_storage().await?, sqlite_storage().await?])
}
