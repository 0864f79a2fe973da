//! S3-compatible bucket storage backend.
//!
//! Supports both AWS S3 and MinIO for development. Object keys are
//! timestamp-prefixed; the public URL is built deterministically from
//! bucket, region and key.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use chrono::Utc;
use secrecy::ExposeSecret;
use tracing::info;

use crate::config::S3Settings;
use crate::error::{AppError, AppResult};

use super::{ObjectStorage, StoredObject, UploadPayload};

/// S3 bucket storage client wrapper.
#[derive(Clone)]
pub struct BucketStorage {
    client: Client,
    bucket: String,
    region: String,
    endpoint: Option<String>,
}

impl BucketStorage {
    /// Create a new bucket storage client from configuration.
    pub async fn new(config: &S3Settings) -> AppResult<Self> {
        let credentials = Credentials::new(
            &config.access_key,
            config.secret_key.expose_secret(),
            None,
            None,
            "yaritu",
        );

        let region = Region::new(config.region.clone());

        let mut s3_config_builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .force_path_style(true); // Required for MinIO

        // Use custom endpoint for MinIO in development
        if let Some(ref endpoint) = config.endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let s3_config = s3_config_builder.build();
        let client = Client::from_conf(s3_config);

        let storage = Self {
            client,
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        storage.ensure_bucket_exists().await?;

        info!("S3 storage initialized: bucket={}", config.bucket);

        Ok(storage)
    }

    /// Ensure the bucket exists, creating it if necessary.
    async fn ensure_bucket_exists(&self) -> AppResult<()> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(()),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    info!("Creating S3 bucket '{}'", self.bucket);
                    self.client
                        .create_bucket()
                        .bucket(&self.bucket)
                        .send()
                        .await
                        .map_err(|e| {
                            AppError::Storage(format!("Failed to create bucket: {}", e))
                        })?;
                    Ok(())
                } else {
                    Err(AppError::Storage(format!(
                        "Failed to access bucket '{}': {}",
                        self.bucket, service_error
                    )))
                }
            }
        }
    }

    fn public_url(&self, key: &str) -> String {
        public_url(self.endpoint.as_deref(), &self.bucket, &self.region, key)
    }
}

/// Public URL for a stored key: path-style through a custom endpoint,
/// virtual-hosted style on AWS proper.
fn public_url(endpoint: Option<&str>, bucket: &str, region: &str, key: &str) -> String {
    match endpoint {
        Some(endpoint) => format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key),
        None => format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key),
    }
}

#[async_trait]
impl ObjectStorage for BucketStorage {
    async fn store(&self, payload: UploadPayload) -> AppResult<StoredObject> {
        let key = object_key(&payload.folder, &payload.filename);

        let body = aws_sdk_s3::primitives::ByteStream::from(payload.bytes);
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(body);

        if let Some(ct) = &payload.content_type {
            request = request.content_type(ct);
        }

        request
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload file to S3: {}", e)))?;

        Ok(StoredObject {
            url: self.public_url(&key),
            key: Some(key),
            provider: self.provider_name(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "s3"
    }
}

/// Build a timestamp-prefixed object key inside the given folder.
///
/// Format: `{folder}/{unix_millis}-{hex4}-{sanitized filename}`. The random
/// suffix keeps same-millisecond uploads from colliding.
pub(crate) fn object_key(folder: &str, filename: &str) -> String {
    let random: [u8; 4] = rand::random();
    format!(
        "{}/{}-{}-{}",
        folder.trim_matches('/'),
        Utc::now().timestamp_millis(),
        hex::encode(random),
        sanitize_filename(filename)
    )
}

/// Keep alphanumerics, dots, dashes and underscores; everything else
/// becomes a dash.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
