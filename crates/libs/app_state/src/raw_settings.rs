use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub logging: LoggingSettings,
    pub api: RawApiSettings,
    pub gallery: RawGallerySettings,
    pub client: ClientSettings,
    pub media: MediaSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawApiSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    pub public_url: String,
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    #[serde(default)]
    pub expose_error_details: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawGallerySettings {
    /// Location of the gallery document, relative paths resolve against the working directory.
    pub document_path: PathBuf,
}

/// Where the client flows find the gallery service.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    pub gallery_endpoint: String,
}

/// Hosted media service used for image binaries.
#[derive(Debug, Deserialize, Clone)]
pub struct MediaSettings {
    pub api_base_url: String,
    pub cloud_name: String,
    pub upload_preset: String,
    pub max_upload_bytes: u64,
    pub allowed_content_types: Vec<String>,
}
