use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An asset stored by the hosted media service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadedAsset {
    /// Absolute address the gallery displays.
    pub url: String,
    /// Opaque identifier required to destroy the asset later.
    pub public_id: String,
}
