use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One entry of the gallery document.
///
/// Only `id` is required when reading. Everything else falls back to an empty value so an
/// older or hand-edited document still loads. Fields this type does not know about are kept
/// in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Free text, usually a comma separated list of keywords.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(rename = "uploadedAt", default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl ImageRecord {
    /// Case-insensitive substring match against name, tags and description.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        let needle = needle.as_str();
        self.name.to_lowercase().contains(needle)
            || self.tags.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    #[must_use]
    pub fn matches_category(&self, category: &str) -> bool {
        category == crate::ALL_CATEGORIES || self.category == category
    }
}
