use crate::error::{ClientError, ValidationError};
use crate::ids::IdGenerator;
use crate::media::{MediaDelegate, MediaFile};
use crate::remote::GalleryRemote;
use crate::state::GalleryState;
use crate::validation::{RecordChanges, RecordDraft, UploadPolicy};
use chrono::{DateTime, SecondsFormat, Utc};
use common_types::{GalleryDocument, ImageRecord, sample_gallery};
use serde::Serialize;
use serde_json::Map;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Where the mirror came from on the last `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    /// The service could not be reached, the built-in sample set is shown instead.
    Sample { reason: String },
}

/// A remote asset whose record is gone but whose destroy call failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanedAsset {
    pub record_id: i64,
    pub public_id: String,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Ids actually removed, in document order.
    pub removed: Vec<i64>,
    pub orphaned: Vec<OrphanedAsset>,
}

/// Owns the client state and is the only path that changes the gallery document.
///
/// Every mutation builds the full next document and hands it to `apply_and_persist`, which
/// updates the mirror and replaces the remote document in one place.
pub struct GalleryController<R, M> {
    remote: R,
    media: M,
    policy: UploadPolicy,
    state: GalleryState,
    ids: IdGenerator,
    orphans: Vec<OrphanedAsset>,
}

impl<R: GalleryRemote, M: MediaDelegate> GalleryController<R, M> {
    pub fn new(remote: R, media: M, policy: UploadPolicy) -> Self {
        Self {
            remote,
            media,
            policy,
            state: GalleryState::default(),
            ids: IdGenerator::new(),
            orphans: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Search, category, admin mode and selection. The document stays read-only here.
    pub fn state_mut(&mut self) -> &mut GalleryState {
        &mut self.state
    }

    #[must_use]
    pub fn orphaned_assets(&self) -> &[OrphanedAsset] {
        &self.orphans
    }

    pub fn take_orphaned_assets(&mut self) -> Vec<OrphanedAsset> {
        std::mem::take(&mut self.orphans)
    }

    /// Starts a fresh session from the remote document, or the sample set if it is unreachable.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> LoadSource {
        match self.remote.fetch().await {
            Ok(document) => {
                info!("Loaded {} gallery records", document.len());
                self.state.reset_session(document);
                LoadSource::Remote
            }
            Err(e) => {
                warn!("Could not load gallery, showing sample images: {}", e);
                self.state.reset_session(sample_gallery());
                LoadSource::Sample {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Replaces the mirror with `document` and pushes it to the service.
    ///
    /// The mirror keeps the new document even when the push fails, the error tells the caller
    /// the service is behind. Admin mode ends once the gallery is empty.
    #[instrument(skip(self, document), fields(records = document.len()))]
    pub async fn apply_and_persist(&mut self, document: GalleryDocument) -> Result<(), ClientError> {
        self.state.set_document(document);
        if self.state.document().is_empty() && self.state.admin_mode() {
            self.state.set_admin_mode(false);
        }
        self.remote.replace(self.state.document()).await?;
        Ok(())
    }

    /// Uploads `file`, then prepends a record for it to the latest remote document.
    #[instrument(skip(self, draft, file), fields(name = %draft.name))]
    pub async fn create(
        &mut self,
        draft: RecordDraft,
        file: Option<&MediaFile>,
    ) -> Result<ImageRecord, ClientError> {
        draft.validate()?;
        self.policy.check(file)?;
        let Some(file) = file else {
            return Err(ValidationError::MissingFile.into());
        };

        let asset = self.media.upload(file).await?;

        let mut document = match self.remote.fetch().await {
            Ok(latest) => latest,
            Err(e) => {
                warn!("Could not refresh gallery before create, using local copy: {}", e);
                self.state.document().clone()
            }
        };
        let max_existing = document.max_id().max(self.state.document().max_id());
        let description = draft.description.trim();
        let record = ImageRecord {
            id: self.ids.next_id_at(Utc::now().timestamp_millis(), max_existing),
            name: draft.name.trim().to_string(),
            tags: draft.tags.trim().to_string(),
            category: draft.category.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            url: asset.url,
            public_id: Some(asset.public_id),
            uploaded_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            extra: Map::new(),
        };

        document.prepend(record.clone());
        self.apply_and_persist(document).await?;
        info!("Created record {}", record.id);
        Ok(record)
    }

    /// Overlays `changes` on record `id`, optionally swapping its image for `replacement`.
    #[instrument(skip(self, changes, replacement))]
    pub async fn edit(
        &mut self,
        id: i64,
        changes: RecordChanges,
        replacement: Option<&MediaFile>,
    ) -> Result<ImageRecord, ClientError> {
        changes.validate()?;
        if self.state.document().find(id).is_none() {
            return Err(ClientError::RecordNotFound(id));
        }
        let asset = match replacement {
            Some(file) => {
                self.policy.check(Some(file))?;
                Some(self.media.upload(file).await?)
            }
            None => None,
        };

        let mut document = self.state.document().clone();
        let record = document
            .find_mut(id)
            .ok_or(ClientError::RecordNotFound(id))?;
        if let Some(name) = changes.name {
            record.name = name.trim().to_string();
        }
        if let Some(tags) = changes.tags {
            record.tags = tags.trim().to_string();
        }
        if let Some(category) = changes.category {
            record.category = category.trim().to_string();
        }
        if let Some(description) = changes.description {
            let description = description.trim();
            record.description = (!description.is_empty()).then(|| description.to_string());
        }
        if let Some(asset) = asset {
            record.url = asset.url;
            record.public_id = Some(asset.public_id);
        }
        let updated = record.clone();

        self.apply_and_persist(document).await?;
        info!("Updated record {}", id);
        Ok(updated)
    }

    /// Deletes the admin selection. An empty selection is rejected.
    pub async fn delete_selected(&mut self) -> Result<DeleteReport, ClientError> {
        if self.state.selection().is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        let ids: Vec<i64> = self.state.selection().iter().copied().collect();
        self.delete_ids(&ids).await
    }

    /// Empties the document, unreadable entries included.
    #[instrument(skip(self))]
    pub async fn delete_all(&mut self) -> Result<DeleteReport, ClientError> {
        let removed: Vec<i64> = self.state.document().iter().map(|r| r.id).collect();
        let targets: HashSet<i64> = removed.iter().copied().collect();
        let orphaned = self.destroy_assets(&targets).await;

        let mut document = self.state.document().clone();
        document.clear();
        self.apply_and_persist(document).await?;

        info!("Deleted all {} records", removed.len());
        Ok(DeleteReport { removed, orphaned })
    }

    /// Best-effort destroys each target's remote asset, one at a time, then drops the
    /// records locally whatever the media service answered. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub async fn delete_ids(&mut self, ids: &[i64]) -> Result<DeleteReport, ClientError> {
        let targets: HashSet<i64> = ids.iter().copied().collect();
        let orphaned = self.destroy_assets(&targets).await;

        let mut document = self.state.document().clone();
        let removed: Vec<i64> = document.remove_ids(&targets).iter().map(|r| r.id).collect();
        self.apply_and_persist(document).await?;

        info!("Deleted {} records", removed.len());
        Ok(DeleteReport { removed, orphaned })
    }

    async fn destroy_assets(&mut self, targets: &HashSet<i64>) -> Vec<OrphanedAsset> {
        let with_assets: Vec<(i64, String)> = self
            .state
            .document()
            .iter()
            .filter(|r| targets.contains(&r.id))
            .filter_map(|r| r.public_id.clone().map(|public_id| (r.id, public_id)))
            .collect();

        let mut orphaned = Vec::new();
        for (record_id, public_id) in with_assets {
            if let Err(e) = self.media.destroy(&public_id).await {
                warn!(
                    "Remote asset {} of record {} was not deleted: {}",
                    public_id, record_id, e
                );
                orphaned.push(OrphanedAsset {
                    record_id,
                    public_id,
                    reason: e.to_string(),
                    recorded_at: Utc::now(),
                });
            }
        }
        self.orphans.extend(orphaned.iter().cloned());
        orphaned
    }

    /// Replaces the whole gallery with the built-in sample set.
    pub async fn reset(&mut self) -> Result<(), ClientError> {
        self.apply_and_persist(sample_gallery()).await
    }

    /// The mirror as pretty-printed JSON, ready to save as a backup.
    pub fn export(&self) -> Result<String, ClientError> {
        Ok(self.state.document().to_pretty_json()?)
    }

    pub async fn export_to(&self, path: &Path) -> Result<(), ClientError> {
        let json = self.export()?;
        tokio::fs::write(path, json)
            .await
            .map_err(|source| ClientError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Exported gallery to {}", path.display());
        Ok(())
    }
}
