//! Environment/runtime helpers
//!
//! Sanity checks to ensure the JSON data directory and its collection files exist.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Create `data_dir` if needed and seed each named file with an empty JSON
/// array when it does not exist yet. Existing files are left untouched.
///
/// Returns the full paths of the files, in the order given.
pub async fn ensure_data_files(data_dir: &Path, file_names: &[&str]) -> anyhow::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;

    let mut paths = Vec::with_capacity(file_names.len());
    for name in file_names {
        let path = data_dir.join(name);
        if tokio::fs::metadata(&path).await.is_err() {
            tokio::fs::write(&path, b"[]")
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", path.display()))?;
            info!(file = %path.display(), "seeded empty collection file");
        } else {
            debug!(file = %path.display(), "collection file present");
        }
        paths.push(path);
    }
    Ok(paths)
}
