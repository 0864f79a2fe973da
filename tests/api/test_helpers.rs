//! Shared test helpers for the API suite.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use yaritu_server::config::{
    ChatSettings, Config, Environment, MediaSettings, S3Settings, StorageSettings, defaults,
};
use yaritu_server::error::AppResult;
use yaritu_server::services::{ObjectStorage, StoredObject, UploadPayload};

use secrecy::SecretString;

/// Admin key used by gated-endpoint tests.
pub const TEST_ADMIN_KEY: &str = "test-admin-key";

/// A config for tests: development, no admin gate, no SMTP, no chat key.
pub fn test_config() -> Config {
    Config {
        environment: Environment::Development,
        host: defaults::DEV_HOST.to_string(),
        port: 0,
        database_url: defaults::DEV_DATABASE_URL.to_string(),
        static_dir: None,
        admin_key: None,
        max_upload_size: defaults::DEV_MAX_UPLOAD_SIZE,
        storage: StorageSettings {
            provider: None,
            s3: S3Settings {
                endpoint: None,
                bucket: defaults::DEV_S3_BUCKET.to_string(),
                region: defaults::DEV_S3_REGION.to_string(),
                access_key: defaults::DEV_S3_ACCESS_KEY.to_string(),
                secret_key: SecretString::from(defaults::DEV_S3_SECRET_KEY),
            },
            media: MediaSettings {
                cloud_name: String::new(),
                upload_preset: String::new(),
            },
        },
        smtp: None,
        chat: ChatSettings {
            api_key: None,
            model: defaults::DEV_CHAT_MODEL.to_string(),
            api_base: defaults::DEV_CHAT_API_BASE.to_string(),
        },
    }
}

/// Storage backend that records calls and returns a deterministic URL.
pub struct RecordingStorage {
    pub calls: Arc<AtomicUsize>,
}

impl RecordingStorage {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn store(&self, payload: UploadPayload) -> AppResult<StoredObject> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(StoredObject {
            url: format!("https://cdn.test/{}/{}", payload.folder, payload.filename),
            key: Some(format!("{}/{}", payload.folder, payload.filename)),
            provider: "test",
        })
    }

    fn provider_name(&self) -> &'static str {
        "test"
    }
}

/// Build a multipart/form-data body. Each part is (field name, optional
/// filename, optional content type, bytes).
pub fn multipart_body(
    boundary: &str,
    parts: &[(&str, Option<&str>, Option<&str>, &[u8])],
) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, filename, content_type, bytes) in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", name).as_bytes(),
            ),
        }
        if let Some(content_type) = content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}
