use crate::api_state::ApiContext;
use crate::root::handlers::{health_check, root};
use axum::{Router, routing::get};

pub fn root_public_router(serves_front_end: bool) -> Router<ApiContext> {
    let router = Router::new().route("/health", get(health_check));
    if serves_front_end {
        router
    } else {
        router.route("/", get(root))
    }
}
