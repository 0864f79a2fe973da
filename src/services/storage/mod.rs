//! Object-storage backends for file uploads.
//!
//! Two interchangeable backends sit behind one capability: store bytes,
//! return a publicly addressable URL. Configuration picks the backend;
//! callers must treat the returned URL as opaque and never assume a
//! canonical format.

pub mod media;
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{StorageProvider, StorageSettings};
use crate::error::{AppError, AppResult};

/// A file buffered from the client, ready to hand to a backend.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    /// Logical folder/category hint, e.g. "jewellery" or "avatars"
    pub folder: String,
    /// Client-supplied filename
    pub filename: String,
    /// MIME type, when the client declared one
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A durably stored object.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Publicly addressable URL. Opaque; the two backends use different schemes.
    pub url: String,
    /// Backend object key, when the backend exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Which backend stored the object
    pub provider: &'static str,
}

/// Store bytes, get back a URL.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store the payload durably and return its URL. No retries; a failure
    /// surfaces directly to the caller.
    async fn store(&self, payload: UploadPayload) -> AppResult<StoredObject>;

    /// Short backend name for logging and responses.
    fn provider_name(&self) -> &'static str;
}

/// Build the configured backend, if any.
pub async fn from_config(
    settings: &StorageSettings,
) -> AppResult<Option<Arc<dyn ObjectStorage>>> {
    match settings.provider {
        Some(StorageProvider::S3) => Ok(Some(Arc::new(
            s3::BucketStorage::new(&settings.s3).await?,
        ))),
        Some(StorageProvider::Media) => {
            Ok(Some(Arc::new(media::MediaStorage::new(&settings.media)?)))
        }
        None => Ok(None),
    }
}

/// Shared handle the upload endpoint resolves its backend through.
#[derive(Clone)]
pub struct StorageState {
    backend: Option<Arc<dyn ObjectStorage>>,
}

impl StorageState {
    pub fn new(backend: Option<Arc<dyn ObjectStorage>>) -> Self {
        Self { backend }
    }

    /// The configured backend, or a configuration error when uploads are
    /// not set up.
    pub fn backend(&self) -> AppResult<&Arc<dyn ObjectStorage>> {
        self.backend.as_ref().ok_or_else(|| {
            AppError::Configuration(
                "No storage backend configured. Set YARITU_STORAGE_PROVIDER.".to_string(),
            )
        })
    }
}
