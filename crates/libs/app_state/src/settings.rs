use crate::{ClientSettings, LoggingSettings, MediaSettings, RawSettings};
use std::path::{PathBuf, absolute};

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub gallery: GallerySettings,
    pub client: ClientSettings,
    pub media: MediaSettings,
}

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub public_url: String,
    pub static_dir: Option<PathBuf>,
    /// Development mode: error envelopes carry a `debug` field with the full error chain.
    pub expose_error_details: bool,
}

#[derive(Debug, Clone)]
pub struct GallerySettings {
    pub document_path: PathBuf,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let document_path =
            absolute(&raw.gallery.document_path).unwrap_or(raw.gallery.document_path);
        let static_dir = raw
            .api
            .static_dir
            .map(|dir| absolute(&dir).unwrap_or(dir));

        Self {
            logging: raw.logging,
            api: ApiSettings {
                host: raw.api.host,
                port: raw.api.port,
                allowed_origins: raw.api.allowed_origins,
                public_url: raw.api.public_url,
                static_dir,
                expose_error_details: raw.api.expose_error_details,
            },
            gallery: GallerySettings { document_path },
            client: raw.client,
            media: raw.media,
        }
    }
}

impl ApiSettings {
    #[must_use]
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MediaSettings {
    #[must_use]
    pub fn accepts_content_type(&self, content_type: &str) -> bool {
        let content_type = content_type.to_ascii_lowercase();
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&content_type))
    }
}
