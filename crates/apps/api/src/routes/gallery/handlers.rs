use crate::api_state::ApiContext;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use common_services::api::gallery::interfaces::{
    ErrorEnvelope, NO_CACHE_HEADERS, SaveAcknowledgement,
};
use common_services::api::gallery::service::{get_gallery, replace_gallery};
use common_types::GalleryDocument;

/// Get the whole gallery document.
///
/// Returns the persisted JSON exactly as stored. Responses are never cacheable.
#[utoipa::path(
    get,
    path = "/gallery",
    tag = "Gallery",
    responses(
        (status = 200, description = "The gallery document.", body = GalleryDocument),
        (status = 500, description = "The document could not be read.", body = ErrorEnvelope),
    )
)]
pub async fn get_gallery_handler(State(context): State<ApiContext>) -> Response {
    match get_gallery(context.store.as_ref()).await {
        Ok(stored) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            NO_CACHE_HEADERS,
            stored.raw,
        )
            .into_response(),
        Err(e) => e.into_response_with(context.settings.api.expose_error_details),
    }
}

/// Replace the whole gallery document.
///
/// The body only has to be valid JSON. There is no authentication, any caller that can
/// reach this endpoint can overwrite the gallery.
#[utoipa::path(
    post,
    path = "/gallery",
    tag = "Gallery",
    request_body = GalleryDocument,
    responses(
        (status = 200, description = "The document was replaced.", body = SaveAcknowledgement),
        (status = 500, description = "The body was not JSON or could not be written.", body = ErrorEnvelope),
    )
)]
pub async fn replace_gallery_handler(State(context): State<ApiContext>, body: Bytes) -> Response {
    match replace_gallery(context.store.as_ref(), &body).await {
        Ok(ack) => Json(ack).into_response(),
        Err(e) => e.into_response_with(context.settings.api.expose_error_details),
    }
}
