//! Storage abstractions for the service layer.
//!
//! Every collection is reached through [`RecordStore`], which has a JSON file
//! implementation ([`JsonFileStore`]) and one sea-orm implementation per
//! entity. Ordering and uniqueness rules live on the record types via
//! [`Record`] so both backends return identical results.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ServiceError;

pub mod json_file_store;
pub mod seaorm;
pub mod selector;

pub use json_file_store::JsonFileStore;
pub use selector::Storage;

/// Which backend the process is running against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageMode {
    Database,
    File,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Database => "database",
            StorageMode::File => "file",
        }
    }
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// A persisted record type.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Fields supplied by the caller on creation (everything except the id).
    type Draft: Send + Sync + 'static;
    /// Equality filter accepted by [`RecordStore::list`].
    type Filter: Send + Sync + 'static;

    /// File holding the collection in file mode.
    const FILE_NAME: &'static str;
    /// Name used in not-found and conflict messages.
    const ENTITY: &'static str;

    fn id(&self) -> i32;

    fn from_draft(id: i32, draft: Self::Draft) -> Self;

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Whether storing `draft` next to `self` would break a uniqueness rule.
    fn conflicts_with(&self, _draft: &Self::Draft) -> bool { false }

    fn order(a: &Self, b: &Self) -> Ordering { a.id().cmp(&b.id()) }
}

/// Sort records into their collection order.
pub fn sort_records<T: Record>(records: &mut [T]) {
    records.sort_by(T::order);
}

/// CRUD over one collection.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Assign the next id and persist.
    async fn create(&self, draft: T::Draft) -> Result<T, ServiceError>;
    /// All records (optionally filtered) in collection order.
    async fn list(&self, filter: Option<&T::Filter>) -> Result<Vec<T>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<T>, ServiceError>;
    /// Remove by id; `Ok(false)` when nothing was stored under it.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    /// Replace the record carrying the same id.
    async fn update(&self, record: T) -> Result<T, ServiceError>;
}
