use crate::storage::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::{fs, task};
use tracing::{debug, instrument};

/// The persisted gallery document exactly as it sits on disk, plus its parsed form.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub raw: String,
    pub value: Value,
}

/// Whole-document persistence. Callers change the document in memory and hand the full
/// result to `replace`.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Fails when the document is missing, unreadable or not valid JSON.
    async fn read(&self) -> Result<StoredDocument, StoreError>;

    /// Overwrites the persisted document unconditionally. Last write wins.
    async fn replace(&self, document: &Value) -> Result<(), StoreError>;
}

/// Keeps the gallery as one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileGalleryStore {
    path: PathBuf,
}

impl JsonFileGalleryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GalleryStore for JsonFileGalleryStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn read(&self) -> Result<StoredDocument, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        debug!("Read gallery document ({} bytes)", raw.len());
        Ok(StoredDocument { raw, value })
    }

    #[instrument(skip(self, document), fields(path = %self.path.display()))]
    async fn replace(&self, document: &Value) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(document)?;
        let path = self.path.clone();
        let bytes = content.len();

        task::spawn_blocking(move || write_atomically(&path, content.as_bytes())).await??;

        debug!("Replaced gallery document ({} bytes)", bytes);
        Ok(())
    }
}

/// Writes to a temp file next to `path` and renames it over the target, so a crash mid-write
/// leaves either the old document or the new one.
fn write_atomically(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::io(parent, e))?;
    temp.write_all(content)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
