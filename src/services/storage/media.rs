//! Media-transformation storage backend.
//!
//! Uploads through the managed media service's unsigned preset API. The
//! service names, transforms and hosts the object itself; its `secure_url`
//! is returned verbatim.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::config::MediaSettings;
use crate::error::{AppError, AppResult};

use super::{ObjectStorage, StoredObject, UploadPayload};

/// HTTP connect timeout for media service calls.
const HTTP_CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
/// HTTP total timeout for media service calls. Uploads can be large.
const HTTP_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(300);

/// Media service upload client.
#[derive(Clone)]
pub struct MediaStorage {
    http: reqwest::Client,
    cloud_name: String,
    upload_preset: String,
}

/// The fields we read from the service's upload response.
#[derive(Debug, Deserialize)]
struct MediaUploadResponse {
    secure_url: String,
    public_id: Option<String>,
}

impl MediaStorage {
    /// Create a new media upload client from configuration.
    pub fn new(config: &MediaSettings) -> AppResult<Self> {
        if config.cloud_name.is_empty() || config.upload_preset.is_empty() {
            return Err(AppError::Configuration(
                "MEDIA_CLOUD_NAME and MEDIA_UPLOAD_PRESET must be set for the media backend"
                    .to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        info!("Media storage initialized: cloud={}", config.cloud_name);

        Ok(Self {
            http,
            cloud_name: config.cloud_name.clone(),
            upload_preset: config.upload_preset.clone(),
        })
    }

    fn upload_url(&self) -> String {
        upload_url(&self.cloud_name)
    }
}

/// Unsigned upload endpoint for a cloud account. `auto` lets the service
/// detect image vs video from the bytes.
fn upload_url(cloud_name: &str) -> String {
    format!("https://api.cloudinary.com/v1_1/{}/auto/upload", cloud_name)
}

#[async_trait]
impl ObjectStorage for MediaStorage {
    async fn store(&self, payload: UploadPayload) -> AppResult<StoredObject> {
        let mut part =
            reqwest::multipart::Part::bytes(payload.bytes).file_name(payload.filename.clone());
        if let Some(ct) = &payload.content_type {
            part = part
                .mime_str(ct)
                .map_err(|e| AppError::InvalidInput(format!("Invalid content type: {}", e)))?;
        }

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", payload.folder.clone());

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Media upload request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Storage(format!(
                "Media upload failed with status {}",
                response.status()
            )));
        }

        let body: MediaUploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::Storage(format!("Invalid media upload response: {}", e)))?;

        Ok(StoredObject {
            url: body.secure_url,
            key: body.public_id,
            provider: self.provider_name(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "media"
    }
}
