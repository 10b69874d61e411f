use crate::ImageRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;
use utoipa::ToSchema;

/// One array slot of the gallery document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryEntry {
    Record(ImageRecord),
    /// Does not read as a record. Written back verbatim, never shown or selectable.
    Unreadable(Value),
}

impl GalleryEntry {
    /// Reads `value` as a record, keeping it verbatim when that fails.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match ImageRecord::deserialize(&value) {
            Ok(record) => Self::Record(record),
            Err(e) => {
                warn!("Keeping unreadable gallery entry as-is: {}", e);
                Self::Unreadable(value)
            }
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&ImageRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Unreadable(_) => None,
        }
    }
}

/// The whole gallery: an ordered list of entries, always read and written in full.
///
/// Lookups, counts and iteration only see readable records. Unreadable entries keep their
/// position and content through every edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Vec<ImageRecord>)]
pub struct GalleryDocument(Vec<GalleryEntry>);

impl GalleryDocument {
    #[must_use]
    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self(records.into_iter().map(GalleryEntry::Record).collect())
    }

    /// Array guard used by every consumer of a fetched document.
    ///
    /// Anything that is not a JSON array becomes an empty gallery.
    #[must_use]
    pub fn from_value_lenient(value: Value) -> Self {
        let Value::Array(items) = value else {
            warn!("Gallery document is not a JSON array, treating it as empty");
            return Self::default();
        };
        Self(items.into_iter().map(GalleryEntry::from_value).collect())
    }

    #[must_use]
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.0
    }

    /// Readable records only.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[must_use]
    pub fn unreadable_count(&self) -> usize {
        self.0.len() - self.len()
    }

    #[must_use]
    pub fn find(&self, id: i64) -> Option<&ImageRecord> {
        self.iter().find(|r| r.id == id)
    }

    /// First record with this id. Ids are not enforced unique, later duplicates are unreachable.
    pub fn find_mut(&mut self, id: i64) -> Option<&mut ImageRecord> {
        self.0.iter_mut().find_map(|entry| match entry {
            GalleryEntry::Record(record) if record.id == id => Some(record),
            _ => None,
        })
    }

    #[must_use]
    pub fn max_id(&self) -> Option<i64> {
        self.iter().map(|r| r.id).max()
    }

    /// Newest first.
    pub fn prepend(&mut self, record: ImageRecord) {
        self.0.insert(0, GalleryEntry::Record(record));
    }

    /// Removes every record whose id is in `ids`, returning the removed records in order.
    /// Unreadable entries have no id and are never removed here.
    pub fn remove_ids(&mut self, ids: &HashSet<i64>) -> Vec<ImageRecord> {
        let mut removed = Vec::new();
        self.0.retain(|entry| match entry {
            GalleryEntry::Record(record) if ids.contains(&record.id) => {
                removed.push(record.clone());
                false
            }
            _ => true,
        });
        removed
    }

    /// Drops every entry, unreadable ones included.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.0.iter().filter_map(GalleryEntry::as_record)
    }

    /// Pretty-printed with two space indentation, the persisted layout.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<ImageRecord>> for GalleryDocument {
    fn from(records: Vec<ImageRecord>) -> Self {
        Self::new(records)
    }
}
