//! File upload endpoint.
//!
//! One route serves every upload slot in the admin UI (avatars, jewellery
//! images, videos, thumbnails): multipart in, storage URL out. The size
//! ceiling is enforced while the stream is drained, so an oversized payload
//! is rejected before the storage backend is ever invoked.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, post, web};
use futures_util::StreamExt;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Envelope;
use crate::services::storage::{StorageState, StoredObject, UploadPayload};

/// Folder used when the client does not send one.
const DEFAULT_FOLDER: &str = "uploads";

/// Longest accepted `folder` field value.
const MAX_FOLDER_LEN: usize = 256;

/// Configure upload routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_file);
}

/// Upload a file to the configured storage backend.
///
/// POST /uploads
/// Content-Type: multipart/form-data with a required `file` field and an
/// optional `folder` field.
#[utoipa::path(
    post,
    path = "/api/v1/uploads",
    tag = "Uploads",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = Envelope<StoredObject>),
        (status = 400, description = "Missing file field", body = crate::error::ErrorResponse),
        (status = 413, description = "File exceeds the size ceiling", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage unconfigured or backend failure", body = crate::error::ErrorResponse),
    )
)]
#[post("/uploads")]
pub async fn upload_file(
    mut payload: Multipart,
    storage: web::Data<StorageState>,
    config: web::Data<Config>,
) -> AppResult<HttpResponse> {
    let ceiling = config.max_upload_size;

    let mut file: Option<UploadPayload> = None;
    let mut folder: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let parsed = field.content_disposition().map(|cd| {
            (
                cd.get_name().unwrap_or("").to_string(),
                cd.get_filename().map(String::from),
            )
        });
        let Some((name, filename)) = parsed else {
            drain_field(&mut field).await;
            continue;
        };

        match name.as_str() {
            "file" => {
                let content_type = field.content_type().map(|m| m.to_string());
                let bytes = collect_limited(&mut field, ceiling).await?;
                file = Some(UploadPayload {
                    folder: String::new(), // filled in below
                    filename: filename.unwrap_or_else(|| "upload".to_string()),
                    content_type,
                    bytes,
                });
            }
            "folder" => {
                folder = Some(read_text_field(&mut field).await?);
            }
            _ => drain_field(&mut field).await,
        }
    }

    let mut file =
        file.ok_or_else(|| AppError::InvalidInput("Missing required field: file".to_string()))?;
    file.folder = folder
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_FOLDER.to_string());

    let backend = storage.backend()?;
    let stored = backend.store(file).await?;

    info!("Stored upload at {} via {}", stored.url, stored.provider);

    Ok(HttpResponse::Ok().json(Envelope::ok(stored)))
}

/// Buffer a field, rejecting the request the moment the running total
/// exceeds `limit`.
pub(crate) async fn collect_limited<S, E>(stream: &mut S, limit: usize) -> AppResult<Vec<u8>>
where
    S: futures_util::Stream<Item = Result<web::Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    let mut buf: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
        if buf.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds the {} byte upload limit",
                limit
            )));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

/// Read a small text field (e.g. `folder`) as trimmed UTF-8.
async fn read_text_field(field: &mut actix_multipart::Field) -> AppResult<String> {
    let bytes = collect_limited(field, MAX_FOLDER_LEN).await?;
    let text = String::from_utf8(bytes)
        .map_err(|_| AppError::InvalidInput("folder must be valid UTF-8".to_string()))?;
    Ok(text.trim().to_string())
}

/// Drain a multipart field without saving.
async fn drain_field(field: &mut actix_multipart::Field) {
    while let Some(chunk) = field.next().await {
        let _ = chunk;
    }
}
