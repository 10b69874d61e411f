use super::error::MediaError;
use std::path::Path;

/// An image picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, guessing its content type from the extension.
    pub async fn from_path(path: &Path) -> Result<Self, MediaError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| MediaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, content_type, bytes))
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Record name to pre-fill: file name without extension, dashes and underscores as spaces.
    #[must_use]
    pub fn suggested_name(&self) -> String {
        suggest_name(&self.file_name)
    }
}

#[must_use]
pub fn suggest_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() && !file_name[dot + 1..].contains('/') => {
            &file_name[..dot]
        }
        _ => file_name,
    };
    stem.replace(['-', '_'], " ")
}
