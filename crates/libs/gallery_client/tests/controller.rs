use async_trait::async_trait;
use color_eyre::Result;
use common_types::{GalleryDocument, UploadedAsset, sample_gallery};
use gallery_client::media::{MediaDelegate, MediaError, MediaFile};
use gallery_client::remote::{GalleryRemote, RemoteError};
use gallery_client::{
    ClientError, GalleryController, LoadSource, RecordChanges, RecordDraft, UploadPolicy,
    ValidationError,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct FakeRemote {
    stored: Arc<Mutex<Option<GalleryDocument>>>,
    fail_replace: bool,
    replaces: Arc<Mutex<usize>>,
}

impl FakeRemote {
    fn with(document: GalleryDocument) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Some(document))),
            ..Self::default()
        }
    }

    fn stored(&self) -> Option<GalleryDocument> {
        self.stored.lock().expect("lock").clone()
    }

    fn set_stored(&self, document: GalleryDocument) {
        *self.stored.lock().expect("lock") = Some(document);
    }

    fn replaces(&self) -> usize {
        *self.replaces.lock().expect("lock")
    }
}

#[async_trait]
impl GalleryRemote for FakeRemote {
    async fn fetch(&self) -> Result<GalleryDocument, RemoteError> {
        self.stored().ok_or(RemoteError::ServerError {
            status: 500,
            body: "Failed to read gallery data.".to_string(),
        })
    }

    async fn replace(&self, document: &GalleryDocument) -> Result<(), RemoteError> {
        if self.fail_replace {
            return Err(RemoteError::ServerError {
                status: 500,
                body: "Failed to save gallery data.".to_string(),
            });
        }
        *self.replaces.lock().expect("lock") += 1;
        self.set_stored(document.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeMedia {
    failing: HashSet<String>,
    destroyed: Arc<Mutex<Vec<String>>>,
    uploads: Arc<Mutex<usize>>,
}

impl FakeMedia {
    fn failing(public_ids: &[&str]) -> Self {
        Self {
            failing: public_ids.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    fn destroyed(&self) -> Vec<String> {
        self.destroyed.lock().expect("lock").clone()
    }

    fn uploads(&self) -> usize {
        *self.uploads.lock().expect("lock")
    }
}

#[async_trait]
impl MediaDelegate for FakeMedia {
    async fn upload(&self, file: &MediaFile) -> Result<UploadedAsset, MediaError> {
        let mut uploads = self.uploads.lock().expect("lock");
        *uploads += 1;
        Ok(UploadedAsset {
            url: format!("https://cdn.example.com/{}", file.file_name),
            public_id: format!("gallery/{}-{}", file.suggested_name(), *uploads),
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        if self.failing.contains(public_id) {
            return Err(MediaError::ServerError {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        self.destroyed
            .lock()
            .expect("lock")
            .push(public_id.to_string());
        Ok(())
    }
}

fn document(value: serde_json::Value) -> GalleryDocument {
    GalleryDocument::from_value_lenient(value)
}

fn three_parts() -> GalleryDocument {
    document(json!([
        { "id": 3, "name": "Rack", "tags": "rack", "category": "carrier-rack", "url": "https://x/3.jpg", "public_id": "gallery/rack" },
        { "id": 2, "name": "Guard", "tags": "guard", "category": "crash-guard", "url": "https://x/2.jpg", "public_id": "gallery/guard" },
        { "id": 1, "name": "Stay", "tags": "saddle", "category": "saddle-stay", "url": "https://x/1.jpg" }
    ]))
}

fn png(name: &str) -> MediaFile {
    MediaFile::new(name, "image/png", vec![1, 2, 3])
}

fn draft(name: &str, category: &str) -> RecordDraft {
    RecordDraft {
        name: name.to_string(),
        tags: " pipe, steel ".to_string(),
        category: category.to_string(),
        description: String::new(),
    }
}

async fn loaded(
    remote: FakeRemote,
    media: FakeMedia,
) -> GalleryController<FakeRemote, FakeMedia> {
    let mut controller = GalleryController::new(remote, media, UploadPolicy::default());
    assert_eq!(controller.load().await, LoadSource::Remote);
    controller
}

fn ids(document: &GalleryDocument) -> Vec<i64> {
    document.iter().map(|r| r.id).collect()
}

#[tokio::test]
async fn load_falls_back_to_sample_set_when_unreachable() {
    let mut controller =
        GalleryController::new(FakeRemote::default(), FakeMedia::default(), UploadPolicy::default());

    let source = controller.load().await;

    assert!(matches!(source, LoadSource::Sample { .. }));
    assert_eq!(controller.state().document(), &sample_gallery());
}

#[tokio::test]
async fn load_resets_transient_state() {
    let remote = FakeRemote::with(three_parts());
    let mut controller = loaded(remote, FakeMedia::default()).await;
    controller.state_mut().set_search("rack");
    controller.state_mut().set_category("exhaust");
    controller.state_mut().set_admin_mode(true);

    controller.load().await;

    assert_eq!(controller.state().search(), "");
    assert_eq!(controller.state().category(), "all");
    assert!(!controller.state().admin_mode());
}

#[tokio::test]
async fn create_prepends_to_latest_remote_document() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let media = FakeMedia::default();
    let mut controller = loaded(remote.clone(), media.clone()).await;

    // Another client wrote in the meantime.
    let mut newer = three_parts();
    newer.prepend(serde_json::from_value(json!({ "id": 50, "name": "Other" }))?);
    remote.set_stored(newer);

    let record = controller
        .create(draft("  Slip-on Exhaust ", "exhaust"), Some(&png("slip-on.png")))
        .await?;

    assert_eq!(record.name, "Slip-on Exhaust");
    assert_eq!(record.tags, "pipe, steel");
    assert_eq!(record.description, None);
    assert_eq!(record.url, "https://cdn.example.com/slip-on.png");
    assert!(record.public_id.is_some());
    assert!(record.uploaded_at.as_deref().is_some_and(|t| t.ends_with('Z')));
    assert!(record.id > 50);

    let stored = remote.stored().expect("persisted");
    assert_eq!(ids(&stored), vec![record.id, 50, 3, 2, 1]);
    assert_eq!(controller.state().document(), &stored);
    Ok(())
}

#[tokio::test]
async fn sequential_creates_get_distinct_ids() -> Result<()> {
    let remote = FakeRemote::with(GalleryDocument::default());
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    let first = controller.create(draft("A", "exhaust"), Some(&png("a.png"))).await?;
    let second = controller.create(draft("B", "exhaust"), Some(&png("b.png"))).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(ids(&remote.stored().expect("persisted")), vec![second.id, first.id]);
    Ok(())
}

#[tokio::test]
async fn create_validation_happens_before_any_network_call() {
    let remote = FakeRemote::with(three_parts());
    let media = FakeMedia::default();
    let mut controller = loaded(remote.clone(), media.clone()).await;

    let missing_name = controller.create(draft(" ", "exhaust"), Some(&png("a.png"))).await;
    let missing_file = controller.create(draft("A", "exhaust"), None).await;
    let wrong_type = controller
        .create(
            draft("A", "exhaust"),
            Some(&MediaFile::new("a.txt", "text/plain", vec![1])),
        )
        .await;

    assert!(matches!(
        missing_name,
        Err(ClientError::Validation(ValidationError::MissingName))
    ));
    assert!(matches!(
        missing_file,
        Err(ClientError::Validation(ValidationError::MissingFile))
    ));
    assert!(matches!(
        wrong_type,
        Err(ClientError::Validation(ValidationError::UnsupportedContentType(_)))
    ));
    assert_eq!(media.uploads(), 0);
    assert_eq!(remote.replaces(), 0);
}

#[tokio::test]
async fn edit_changes_only_submitted_fields() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    let changes = RecordChanges {
        name: Some("Heavy Guard".to_string()),
        description: Some(" Steel ".to_string()),
        ..RecordChanges::default()
    };
    let updated = controller.edit(2, changes, None).await?;

    assert_eq!(updated.name, "Heavy Guard");
    assert_eq!(updated.description.as_deref(), Some("Steel"));
    assert_eq!(updated.tags, "guard");
    assert_eq!(updated.category, "crash-guard");
    assert_eq!(updated.url, "https://x/2.jpg");
    assert_eq!(updated.public_id.as_deref(), Some("gallery/guard"));

    let stored = remote.stored().expect("persisted");
    assert_eq!(stored.find(2), Some(&updated));
    assert_eq!(stored.find(3), three_parts().find(3));
    Ok(())
}

#[tokio::test]
async fn edit_with_replacement_image_swaps_url_and_public_id() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let mut controller = loaded(remote, FakeMedia::default()).await;

    let updated = controller
        .edit(1, RecordChanges::default(), Some(&png("new-stay.png")))
        .await?;

    assert_eq!(updated.url, "https://cdn.example.com/new-stay.png");
    assert_eq!(updated.public_id.as_deref(), Some("gallery/new stay-1"));
    assert_eq!(updated.name, "Stay");
    Ok(())
}

#[tokio::test]
async fn edit_unknown_id_is_not_found() {
    let remote = FakeRemote::with(three_parts());
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    let result = controller.edit(404, RecordChanges::default(), None).await;

    assert!(matches!(result, Err(ClientError::RecordNotFound(404))));
    assert_eq!(remote.replaces(), 0);
}

#[tokio::test]
async fn delete_destroys_assets_then_removes_records() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let media = FakeMedia::default();
    let mut controller = loaded(remote.clone(), media.clone()).await;

    let report = controller.delete_ids(&[3, 1]).await?;

    assert_eq!(report.removed, vec![3, 1]);
    assert!(report.orphaned.is_empty());
    assert_eq!(media.destroyed(), vec!["gallery/rack".to_string()]);
    assert_eq!(ids(&remote.stored().expect("persisted")), vec![2]);
    Ok(())
}

#[tokio::test]
async fn failed_destroy_is_recorded_as_orphan_and_delete_proceeds() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let media = FakeMedia::failing(&["gallery/guard"]);
    let mut controller = loaded(remote.clone(), media.clone()).await;

    let report = controller.delete_all().await?;

    assert_eq!(report.removed, vec![3, 2, 1]);
    assert_eq!(report.orphaned.len(), 1);
    assert_eq!(report.orphaned[0].record_id, 2);
    assert_eq!(report.orphaned[0].public_id, "gallery/guard");
    assert_eq!(controller.orphaned_assets(), report.orphaned.as_slice());
    assert!(remote.stored().expect("persisted").is_empty());

    assert_eq!(controller.take_orphaned_assets().len(), 1);
    assert!(controller.orphaned_assets().is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_unknown_id_leaves_document_unchanged() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    let report = controller.delete_ids(&[999]).await?;

    assert!(report.removed.is_empty());
    assert_eq!(remote.stored().expect("persisted"), three_parts());
    Ok(())
}

fn with_unreadable_entries() -> serde_json::Value {
    json!([
        { "id": 3, "name": "Rack", "tags": "rack", "category": "carrier-rack", "url": "https://x/3.jpg", "public_id": "gallery/rack" },
        { "id": 2, "name": "Guard", "tags": null, "category": "crash-guard", "url": "https://x/2.jpg", "public_id": "gallery/guard" },
        { "id": "1", "name": "Stay", "tags": "saddle", "category": "saddle-stay", "url": "https://x/1.jpg" }
    ])
}

#[tokio::test]
async fn deleting_unknown_id_keeps_unreadable_entries() -> Result<()> {
    let value = with_unreadable_entries();
    let remote = FakeRemote::with(document(value.clone()));
    let media = FakeMedia::default();
    let mut controller = loaded(remote.clone(), media.clone()).await;
    assert_eq!(controller.state().admin_stats().total, 1);

    let report = controller.delete_ids(&[999, 2]).await?;

    assert!(report.removed.is_empty());
    assert!(media.destroyed().is_empty());
    let stored = remote.stored().expect("persisted");
    assert_eq!(serde_json::to_value(&stored)?, value);
    Ok(())
}

#[tokio::test]
async fn edits_write_unreadable_entries_back_in_place() -> Result<()> {
    let remote = FakeRemote::with(document(with_unreadable_entries()));
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    controller
        .create(draft("Slip-on", "exhaust"), Some(&png("slip-on.png")))
        .await?;
    controller.delete_ids(&[3]).await?;

    let stored = serde_json::to_value(remote.stored().expect("persisted"))?;
    let entries = stored.as_array().expect("array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], json!("Slip-on"));
    assert_eq!(entries[1], with_unreadable_entries()[1]);
    assert_eq!(entries[2], with_unreadable_entries()[2]);
    Ok(())
}

#[tokio::test]
async fn delete_all_empties_the_document() -> Result<()> {
    let remote = FakeRemote::with(document(with_unreadable_entries()));
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    let report = controller.delete_all().await?;

    assert_eq!(report.removed, vec![3]);
    assert!(remote.stored().expect("persisted").entries().is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_selected_requires_selection_and_exits_admin_when_empty() -> Result<()> {
    let remote = FakeRemote::with(document(json!([{ "id": 7, "name": "Only" }])));
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;
    controller.state_mut().set_admin_mode(true);

    let empty = controller.delete_selected().await;
    assert!(matches!(
        empty,
        Err(ClientError::Validation(ValidationError::EmptySelection))
    ));

    controller.state_mut().toggle_selection(7);
    let report = controller.delete_selected().await?;

    assert_eq!(report.removed, vec![7]);
    assert!(controller.state().selection().is_empty());
    assert!(!controller.state().admin_mode());
    Ok(())
}

#[tokio::test]
async fn persist_failure_keeps_local_change_and_reports_remote_error() {
    let remote = FakeRemote {
        fail_replace: true,
        ..FakeRemote::with(three_parts())
    };
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    let result = controller.delete_ids(&[1]).await;

    assert!(matches!(result, Err(ClientError::Remote(_))));
    assert_eq!(ids(controller.state().document()), vec![3, 2]);
    assert_eq!(remote.stored(), Some(three_parts()));
}

#[tokio::test]
async fn reset_persists_sample_set() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let mut controller = loaded(remote.clone(), FakeMedia::default()).await;

    controller.reset().await?;

    assert_eq!(remote.stored(), Some(sample_gallery()));
    assert_eq!(controller.state().document().len(), 4);
    Ok(())
}

#[tokio::test]
async fn export_matches_mirror() -> Result<()> {
    let remote = FakeRemote::with(three_parts());
    let controller = loaded(remote, FakeMedia::default()).await;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(common_types::EXPORT_FILE_NAME);

    controller.export_to(&path).await?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, controller.export()?);
    let parsed: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(parsed, serde_json::to_value(controller.state().document())?);
    assert!(written.starts_with("[\n  {\n    \"id\": 3,"));
    Ok(())
}
