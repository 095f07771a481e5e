use crate::errors::RepositoryError;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Whole-collection persistence over a single JSON file: `read_all` parses
/// the entire array, `write_all` replaces it. There is no partial update.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guard that serializes read-modify-write cycles of in-process writers.
    /// The file itself stays last-writer-wins across OS processes.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub async fn read_all<T>(&self) -> Result<Vec<T>, RepositoryError>
    where
        T: DeserializeOwned,
    {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "store file {} does not exist yet, reading as empty collection",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(RepositoryError::from(e)),
        };

        let records = serde_json::from_slice(&raw)?;
        Ok(records)
    }

    pub async fn write_all<T>(&self, records: &[T]) -> Result<(), RepositoryError>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // Pretty-printed so the file diffs cleanly when edited by hand.
        let raw = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, raw).await?;

        Ok(())
    }
}
