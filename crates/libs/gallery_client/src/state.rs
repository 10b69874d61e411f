use common_types::{ALL_CATEGORIES, GalleryDocument, ImageRecord};
use std::collections::BTreeSet;

/// Counts shown in the admin toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub total: usize,
    pub selected: usize,
}

/// Mirror of the gallery document plus the transient view state built on it.
///
/// The document only changes through the controller. Search, category, admin mode and the
/// selection are free to change and never get persisted.
#[derive(Debug, Clone)]
pub struct GalleryState {
    document: GalleryDocument,
    search: String,
    category: String,
    admin_mode: bool,
    selection: BTreeSet<i64>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(GalleryDocument::default())
    }
}

impl GalleryState {
    #[must_use]
    pub fn new(document: GalleryDocument) -> Self {
        Self {
            document,
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            admin_mode: false,
            selection: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn document(&self) -> &GalleryDocument {
        &self.document
    }

    /// Swaps the mirror. Selected ids that no longer exist are dropped.
    pub(crate) fn set_document(&mut self, document: GalleryDocument) {
        self.document = document;
        let document = &self.document;
        self.selection.retain(|id| document.find(*id).is_some());
    }

    /// Fresh session on top of `document`: filters back to defaults, admin mode off.
    pub(crate) fn reset_session(&mut self, document: GalleryDocument) {
        *self = Self::new(document);
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: &str) {
        search.clone_into(&mut self.search);
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: &str) {
        category.clone_into(&mut self.category);
    }

    /// Records passing both the category filter and the search, in document order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&ImageRecord> {
        self.document
            .iter()
            .filter(|r| r.matches_category(&self.category) && r.matches_search(&self.search))
            .collect()
    }

    #[must_use]
    pub const fn admin_mode(&self) -> bool {
        self.admin_mode
    }

    /// Leaving admin mode clears the selection.
    pub fn set_admin_mode(&mut self, enabled: bool) {
        self.admin_mode = enabled;
        if !enabled {
            self.selection.clear();
        }
    }

    pub fn toggle_admin_mode(&mut self) -> bool {
        self.set_admin_mode(!self.admin_mode);
        self.admin_mode
    }

    /// Flips selection of `id`, returning whether it is now selected.
    ///
    /// Ignored outside admin mode and for ids not in the document.
    pub fn toggle_selection(&mut self, id: i64) -> bool {
        if !self.admin_mode || self.document.find(id).is_none() {
            return false;
        }
        if self.selection.remove(&id) {
            false
        } else {
            self.selection.insert(id);
            true
        }
    }

    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<i64> {
        &self.selection
    }

    #[must_use]
    pub fn admin_stats(&self) -> AdminStats {
        AdminStats {
            total: self.document.len(),
            selected: self.selection.len(),
        }
    }
}
