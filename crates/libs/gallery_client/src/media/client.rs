use super::error::MediaError;
use super::file::MediaFile;
use app_state::MediaSettings;
use async_trait::async_trait;
use common_types::UploadedAsset;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{info, instrument};
use url::Url;

/// Hosted image storage. Upload yields a public URL and an opaque id, destroy takes the id.
#[async_trait]
pub trait MediaDelegate: Send + Sync {
    async fn upload(&self, file: &MediaFile) -> Result<UploadedAsset, MediaError>;

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError>;
}

/// Client for an unsigned-preset image host (`/v1_1/{cloud}/image/{upload,destroy}`).
#[derive(Debug, Clone)]
pub struct HostedMediaClient {
    http_client: Client,
    api_base_url: String,
    cloud_name: String,
    upload_preset: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl HostedMediaClient {
    pub fn new(
        http_client: Client,
        api_base_url: impl Into<String>,
        cloud_name: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_base_url: api_base_url.into(),
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
        }
    }

    #[must_use]
    pub fn from_settings(http_client: Client, settings: &MediaSettings) -> Self {
        Self::new(
            http_client,
            settings.api_base_url.clone(),
            settings.cloud_name.clone(),
            settings.upload_preset.clone(),
        )
    }

    fn image_url(&self, action: &str) -> Result<Url, MediaError> {
        let base = self.api_base_url.trim_end_matches('/');
        Ok(format!("{base}/v1_1/{}/image/{action}", self.cloud_name).parse()?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, MediaError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(MediaError::ServerError {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl MediaDelegate for HostedMediaClient {
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.size()))]
    async fn upload(&self, file: &MediaFile) -> Result<UploadedAsset, MediaError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone())
            .text("cloud_name", self.cloud_name.clone());

        let response = self
            .http_client
            .post(self.image_url("upload")?)
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadResponse = ensure_success(response).await?.json().await?;

        info!("Uploaded {} as {}", file.file_name, uploaded.public_id);
        Ok(UploadedAsset {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }

    #[instrument(skip(self))]
    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        let form = Form::new()
            .text("public_id", public_id.to_string())
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .http_client
            .post(self.image_url("destroy")?)
            .multipart(form)
            .send()
            .await?;
        let destroyed: DestroyResponse = ensure_success(response).await?.json().await?;

        if destroyed.result != "ok" {
            return Err(MediaError::NotDestroyed {
                public_id: public_id.to_string(),
                result: destroyed.result,
            });
        }
        info!("Deleted remote asset {}", public_id);
        Ok(())
    }
}
