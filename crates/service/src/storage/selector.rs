use std::{path::Path, sync::Arc};

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument};

use super::seaorm::{SeaOrmAppointmentStore, SeaOrmLoyaltyStore, SeaOrmProfileStore, SeaOrmReviewStore, SeaOrmUserStore};
use super::{JsonFileStore, Record, RecordStore, StorageMode};
use crate::appointment::domain::Appointment;
use crate::auth::domain::User;
use crate::errors::ServiceError;
use crate::loyalty::domain::LoyaltyAccount;
use crate::profile::domain::Profile;
use crate::review::domain::Review;

/// Active storage backend with one store per collection.
///
/// Built once at startup and shared read-only afterwards; the mode never
/// changes for the life of the process.
#[derive(Clone)]
pub struct Storage {
    pub mode: StorageMode,
    pub users: Arc<dyn RecordStore<User>>,
    pub profiles: Arc<dyn RecordStore<Profile>>,
    pub appointments: Arc<dyn RecordStore<Appointment>>,
    pub reviews: Arc<dyn RecordStore<Review>>,
    pub loyalty: Arc<dyn RecordStore<LoyaltyAccount>>,
    /// File-mode user collection, consulted as a secondary email lookup
    /// while running against the database.
    pub legacy_users: Option<Arc<dyn RecordStore<User>>>,
}

/// Every collection file used in file mode.
pub const COLLECTION_FILES: [&str; 5] = [
    User::FILE_NAME,
    Profile::FILE_NAME,
    Appointment::FILE_NAME,
    Review::FILE_NAME,
    LoyaltyAccount::FILE_NAME,
];

impl Storage {
    /// Try the database once; fall back to the JSON files in `data_dir` when
    /// connecting or preparing the schema fails.
    #[instrument(skip_all, fields(data_dir = %data_dir.display()))]
    pub async fn select(db_cfg: &DatabaseConfig, data_dir: &Path) -> Result<Self, ServiceError> {
        let prepared = match models::db::connect(db_cfg).await {
            Ok(db) => models::db::ensure_schema(&db).await.map(|_| db),
            Err(e) => Err(e),
        };
        match prepared {
            Ok(db) => {
                info!(mode = StorageMode::Database.as_str(), "storage_mode_selected");
                Ok(Self::database(db, data_dir))
            }
            Err(e) => {
                error!(error = %e, "database unavailable, falling back to JSON files");
                let storage = Self::file(data_dir).await?;
                info!(mode = StorageMode::File.as_str(), "storage_mode_selected");
                Ok(storage)
            }
        }
    }

    /// Database mode over an already prepared connection.
    pub fn database(db: DatabaseConnection, data_dir: &Path) -> Self {
        let legacy_users: Arc<dyn RecordStore<User>> = JsonFileStore::<User>::in_dir(data_dir);
        Self {
            mode: StorageMode::Database,
            users: Arc::new(SeaOrmUserStore { db: db.clone() }),
            profiles: Arc::new(SeaOrmProfileStore { db: db.clone() }),
            appointments: Arc::new(SeaOrmAppointmentStore { db: db.clone() }),
            reviews: Arc::new(SeaOrmReviewStore { db: db.clone() }),
            loyalty: Arc::new(SeaOrmLoyaltyStore { db }),
            legacy_users: Some(legacy_users),
        }
    }

    /// File mode: provision `data_dir` and its collection files.
    pub async fn file(data_dir: &Path) -> Result<Self, ServiceError> {
        common::env::ensure_data_files(data_dir, &COLLECTION_FILES)
            .await
            .map_err(ServiceError::storage)?;
        Ok(Self {
            mode: StorageMode::File,
            users: JsonFileStore::<User>::in_dir(data_dir),
            profiles: JsonFileStore::<Profile>::in_dir(data_dir),
            appointments: JsonFileStore::<Appointment>::in_dir(data_dir),
            reviews: JsonFileStore::<Review>::in_dir(data_dir),
            loyalty: JsonFileStore::<LoyaltyAccount>::in_dir(data_dir),
            legacy_users: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sqlite_storage, temp_data_dir};

    #[tokio::test]
    async fn unreachable_database_falls_back_to_files() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir();
        let cfg = DatabaseConfig {
            url: "mysql://root@127.0.0.1:1/vipcortes".into(),
            connect_timeout_secs: 1,
            acquire_timeout_secs: 1,
            ..DatabaseConfig::default()
        };
        let storage = Storage::select(&cfg, &dir).await?;
        assert_eq!(storage.mode, StorageMode::File);
        assert!(storage.legacy_users.is_none());
        for name in COLLECTION_FILES {
            assert_eq!(tokio::fs::read_to_string(dir.join(name)).await?, "[]");
        }
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn reachable_database_selects_database_mode() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir();
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        };
        let storage = Storage::select(&cfg, &dir).await?;
        assert_eq!(storage.mode, StorageMode::Database);
        assert!(storage.legacy_users.is_some());
        assert!(storage.appointments.list(None).await?.is_empty());
        // database mode leaves the data directory alone
        assert!(tokio::fs::metadata(&dir).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn both_modes_report_their_name() -> Result<(), anyhow::Error> {
        let (db_storage, dir) = sqlite_storage().await?;
        assert_eq!(db_storage.mode.as_str(), "database");
        let file_storage = Storage::file(&dir).await?;
        assert_eq!(file_storage.mode.to_string(), "file");
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
