use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::storage::{GalleryStore, JsonFileGalleryStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn GalleryStore>,
    pub settings: AppSettings,
}

impl ApiContext {
    /// Context backed by the JSON file named in the gallery settings.
    #[must_use]
    pub fn from_settings(settings: AppSettings) -> Self {
        let store = JsonFileGalleryStore::new(settings.gallery.document_path.clone());
        Self {
            store: Arc::new(store),
            settings,
        }
    }
}

impl FromRef<ApiContext> for Arc<dyn GalleryStore> {
    fn from_ref(state: &ApiContext) -> Self {
        state.store.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
