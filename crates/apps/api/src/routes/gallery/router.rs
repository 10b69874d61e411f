use crate::api_state::ApiContext;
use crate::routes::gallery::handlers::{get_gallery_handler, replace_gallery_handler};
use axum::Router;
use axum::routing::{MethodRouter, get};
use common_types::{GALLERY_ROUTE, LEGACY_FUNCTION_ROUTE};

fn gallery_methods() -> MethodRouter<ApiContext> {
    get(get_gallery_handler).post(replace_gallery_handler)
}

pub fn gallery_public_router() -> Router<ApiContext> {
    Router::new()
        .route(GALLERY_ROUTE, gallery_methods())
        .route(LEGACY_FUNCTION_ROUTE, gallery_methods())
}
