use super::error::RemoteError;
use app_state::ClientSettings;
use async_trait::async_trait;
use chrono::Utc;
use common_types::{CACHE_BUSTER_PARAM, GalleryDocument};
use reqwest::{Client, Response, header};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

/// The Gallery Service as seen from a client: whole-document fetch and replace.
#[async_trait]
pub trait GalleryRemote: Send + Sync {
    /// Always bypasses caches. A non-array document comes back as an empty gallery.
    async fn fetch(&self) -> Result<GalleryDocument, RemoteError>;

    async fn replace(&self, document: &GalleryDocument) -> Result<(), RemoteError>;
}

#[derive(Debug, Clone)]
pub struct HttpGalleryClient {
    http_client: Client,
    endpoint: Url,
}

impl HttpGalleryClient {
    #[must_use]
    pub const fn new(http_client: Client, endpoint: Url) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    pub fn from_settings(
        http_client: Client,
        settings: &ClientSettings,
    ) -> Result<Self, RemoteError> {
        Ok(Self::new(http_client, settings.gallery_endpoint.parse()?))
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn cache_busted_endpoint(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(
            CACHE_BUSTER_PARAM,
            &Utc::now().timestamp_millis().to_string(),
        );
        url
    }
}

async fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::ServerError {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl GalleryRemote for HttpGalleryClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<GalleryDocument, RemoteError> {
        let response = self
            .http_client
            .get(self.cache_busted_endpoint())
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let value: Value = ensure_success(response).await?.json().await?;
        let document = GalleryDocument::from_value_lenient(value);
        debug!("Fetched {} gallery records", document.len());
        Ok(document)
    }

    #[instrument(skip(self, document), fields(endpoint = %self.endpoint, records = document.len()))]
    async fn replace(&self, document: &GalleryDocument) -> Result<(), RemoteError> {
        let response = self
            .http_client
            .post(self.cache_busted_endpoint())
            .json(document)
            .send()
            .await?;
        ensure_success(response).await?;
        debug!("Gallery replaced remotely");
        Ok(())
    }
}
