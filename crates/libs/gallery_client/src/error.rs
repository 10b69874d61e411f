use crate::media::MediaError;
use crate::remote::RemoteError;
use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised before any network call is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a name for the part")]
    MissingName,

    #[error("Please select a category for the part")]
    MissingCategory,

    #[error("Please select an image to upload")]
    MissingFile,

    #[error("Unsupported image type '{0}'")]
    UnsupportedContentType(String),

    #[error("Image is {size} bytes, the limit is {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    #[error("No images selected")]
    EmptySelection,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Media service failed: {0}")]
    MediaDelegate(#[from] MediaError),

    #[error("Gallery service failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("No image with id {0}")]
    RecordNotFound(i64),

    #[error("Failed to serialize gallery: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
