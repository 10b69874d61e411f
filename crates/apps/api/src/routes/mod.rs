mod api_doc;
pub mod gallery;
pub mod root;

use crate::api_state::ApiContext;
use crate::gallery::router::gallery_public_router;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    let static_dir = api_state.settings.api.static_dir.clone();

    let router = Router::new()
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(root_public_router(static_dir.is_some()))
        .merge(gallery_public_router());

    let router = match static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router.with_state(api_state)
}
