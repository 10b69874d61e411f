use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Failed to build gallery URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Gallery service returned {status}: {body}")]
    ServerError { status: u16, body: String },
}
