use crate::api::gallery::error::GalleryError;
use crate::api::gallery::interfaces::SaveAcknowledgement;
use crate::storage::{GalleryStore, StoredDocument};
use serde_json::Value;
use tracing::{info, instrument};

/// Reads the whole gallery document.
#[instrument(skip(store), err(Debug))]
pub async fn get_gallery(store: &dyn GalleryStore) -> Result<StoredDocument, GalleryError> {
    store.read().await.map_err(GalleryError::Read)
}

/// Replaces the whole gallery document with `body`.
///
/// Only JSON syntax is checked. Whatever shape the caller sends is persisted as-is.
#[instrument(skip(store, body), fields(body_len = body.len()), err(Debug))]
pub async fn replace_gallery(
    store: &dyn GalleryStore,
    body: &[u8],
) -> Result<SaveAcknowledgement, GalleryError> {
    let document: Value = serde_json::from_slice(body).map_err(GalleryError::InvalidBody)?;
    store
        .replace(&document)
        .await
        .map_err(GalleryError::Write)?;

    if let Value::Array(records) = &document {
        info!("Gallery replaced with {} records", records.len());
    } else {
        info!("Gallery replaced with a non-array document");
    }
    Ok(SaveAcknowledgement::ok())
}
