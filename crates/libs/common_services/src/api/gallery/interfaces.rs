use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headers on every successful gallery read. The client always wants the latest write.
pub const NO_CACHE_HEADERS: [(&str, &str); 3] = [
    ("cache-control", "no-store, no-cache, must-revalidate, max-age=0"),
    ("pragma", "no-cache"),
    ("expires", "0"),
];

/// Headers answering a CORS preflight on the gallery routes.
pub const CORS_PREFLIGHT_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SaveAcknowledgement {
    pub success: bool,
}

impl SaveAcknowledgement {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Machine readable failure returned by both server variants.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: String,
    /// Full error chain, only filled in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}
