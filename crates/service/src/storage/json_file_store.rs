use std::{marker::PhantomData, path::{Path, PathBuf}, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use super::{sort_records, Record, RecordStore};
use crate::errors::ServiceError;

/// JSON file-backed collection.
///
/// The file holds a JSON array of records. Every call reads the whole file,
/// so edits made by hand between requests are picked up; mutations rewrite it
/// through a sibling temp file and a rename. Writers inside the process are
/// serialised by a mutex, other processes are not coordinated with.
pub struct JsonFileStore<T> {
    file_path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileStore<T> {
    /// Store backed by `path`. The file is not touched until first use; a
    /// missing file reads as an empty collection.
    pub fn open<P: Into<PathBuf>>(path: P) -> Arc<Self> {
        Arc::new(Self { file_path: path.into(), write_lock: Mutex::new(()), _record: PhantomData })
    }

    /// Store for `T` inside `data_dir`, using the record's file name.
    pub fn in_dir(data_dir: &Path) -> Arc<Self> { Self::open(data_dir.join(T::FILE_NAME)) }

    async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ServiceError::storage(format!("read {}: {e}", self.file_path.display()))),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::storage(format!("parse {}: {e}", self.file_path.display())))
    }

    async fn save(&self, records: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(records).map_err(ServiceError::storage)?;
        let mut tmp_name = self.file_path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
        }
        fs::write(&tmp, data).await.map_err(ServiceError::storage)?;
        fs::rename(&tmp, &self.file_path).await.map_err(ServiceError::storage)?;
        debug!(file = %self.file_path.display(), count = records.len(), "collection saved");
        Ok(())
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for JsonFileStore<T> {
    async fn create(&self, draft: T::Draft) -> Result<T, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        if records.iter().any(|r| r.conflicts_with(&draft)) {
            return Err(ServiceError::Conflict(format!("{} already exists", T::ENTITY)));
        }
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        let record = T::from_draft(next_id, draft);
        records.push(record.clone());
        self.save(&records).await?;
        Ok(record)
    }

    async fn list(&self, filter: Option<&T::Filter>) -> Result<Vec<T>, ServiceError> {
        let mut records = self.load().await?;
        if let Some(filter) = filter {
            records.retain(|r| r.matches(filter));
        }
        sort_records(&mut records);
        Ok(records)
    }

    async fn get(&self, id: i32) -> Result<Option<T>, ServiceError> {
        Ok(self.load().await?.into_iter().find(|r| r.id() == id))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records).await?;
        Ok(true)
    }

    async fn update(&self, record: T) -> Result<T, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| ServiceError::not_found(T::ENTITY))?;
        *slot = record.clone();
        self.save(&records).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: i32,
        text: String,
    }

    impl Record for Note {
        type Draft = String;
        type Filter = String;
        const FILE_NAME: &'static str = "notes.json";
        const ENTITY: &'static str = "note";

        fn id(&self) -> i32 { self.id }
        fn from_draft(id: i32, text: String) -> Self { Self { id, text } }
        fn matches(&self, filter: &String) -> bool { &self.text == filter }
        fn conflicts_with(&self, draft: &String) -> bool { draft == "taken" && self.text == "taken" }
        fn order(a: &Self, b: &Self) -> Ordering { a.text.cmp(&b.text).then(a.id.cmp(&b.id)) }
    }

    fn tmp_file() -> PathBuf {
        std::env::temp_dir().join(format!("json_file_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn json_file_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        let store = JsonFileStore::<Note>::open(&tmp);

        // missing file reads as empty
        assert!(store.list(None).await?.is_empty());

        let a = store.create("b".into()).await?;
        let b = store.create("a".into()).await?;
        assert_eq!((a.id, b.id), (1, 2));

        // collection order, then filter
        let all = store.list(None).await?;
        assert_eq!(all.iter().map(|n| n.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(store.list(Some(&"b".to_string())).await?, vec![a.clone()]);

        store.update(Note { id: 1, text: "c".into() }).await?;
        assert_eq!(store.get(1).await?.map(|n| n.text), Some("c".into()));
        assert!(matches!(store.update(Note { id: 9, text: "x".into() }).await, Err(ServiceError::NotFound(_))));

        assert!(store.delete(2).await?);
        assert!(!store.delete(2).await?);

        let reloaded = JsonFileStore::<Note>::open(&tmp);
        assert_eq!(reloaded.list(None).await?.len(), 1);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn next_id_is_max_plus_one() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        tokio::fs::write(&tmp, r#"[{"id": 7, "text": "x"}, {"id": 3, "text": "y"}]"#).await?;
        let store = JsonFileStore::<Note>::open(&tmp);
        assert_eq!(store.create("z".into()).await?.id, 8);

        // a deleted top id gets reused, the same as max+1 on the remaining rows
        store.delete(8).await?;
        store.delete(7).await?;
        assert_eq!(store.create("w".into()).await?.id, 4);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn empty_file_reads_as_empty_collection() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        tokio::fs::write(&tmp, "  \n").await?;
        let store = JsonFileStore::<Note>::open(&tmp);
        assert!(store.list(None).await?.is_empty());
        assert_eq!(store.create("a".into()).await?.id, 1);
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        tokio::fs::write(&tmp, "{not json").await?;
        let store = JsonFileStore::<Note>::open(&tmp);
        assert!(matches!(store.list(None).await, Err(ServiceError::Storage(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn conflicting_draft_is_rejected() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        let store = JsonFileStore::<Note>::open(&tmp);
        store.create("taken".into()).await?;
        assert!(matches!(store.create("taken".into()).await, Err(ServiceError::Conflict(_))));
        assert_eq!(store.list(None).await?.len(), 1);
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        let store = JsonFileStore::<Note>::open(&tmp);
        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.create(format!("n{i}")).await }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await??.id);
        }
        ids.sort();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
