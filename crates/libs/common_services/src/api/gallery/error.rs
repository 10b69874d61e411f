use crate::api::gallery::interfaces::ErrorEnvelope;
use crate::storage::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Failed to read gallery data.")]
    Read(#[source] StoreError),

    #[error("Failed to save gallery data.")]
    Write(#[source] StoreError),

    #[error("Failed to save gallery data.")]
    InvalidBody(#[source] serde_json::Error),
}

fn log_error(error: &GalleryError) {
    match error {
        GalleryError::Read(e) => error!("Failed to read gallery document: {}", e),
        GalleryError::Write(e) => error!("Failed to write gallery document: {}", e),
        GalleryError::InvalidBody(e) => error!("Gallery body is not valid JSON: {}", e),
    }
}

impl GalleryError {
    /// Every gallery failure is a server error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Diagnostic kind, `StorageUnavailable` for anything the store reported.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Read(_) | Self::Write(_) => "StorageUnavailable",
            Self::InvalidBody(_) => "MalformedDocument",
        }
    }

    #[must_use]
    pub fn envelope(&self, include_debug: bool) -> ErrorEnvelope {
        let details = match self {
            Self::Read(e) | Self::Write(e) => e.to_string(),
            Self::InvalidBody(e) => e.to_string(),
        };
        ErrorEnvelope {
            error: self.to_string(),
            details,
            debug: include_debug.then(|| format!("{}: {self:?}", self.kind())),
        }
    }

    /// Logs server side and renders the envelope.
    #[must_use]
    pub fn into_response_with(self, include_debug: bool) -> Response {
        log_error(&self);
        (self.status(), Json(self.envelope(include_debug))).into_response()
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        self.into_response_with(false)
    }
}
