//! Upload endpoint tests: field validation, the size ceiling, and the
//! success envelope.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use actix_web::{App, test, web};
use serde_json::Value;

use yaritu_server::services::storage::StorageState;
use yaritu_server::services::upload;

use crate::test_helpers::{RecordingStorage, multipart_body, test_config};

const BOUNDARY: &str = "----yaritu-test-boundary";

fn multipart_request(uri: &str, body: Vec<u8>) -> test::TestRequest {
    test::TestRequest::post().uri(uri).insert_header((
        "content-type",
        format!("multipart/form-data; boundary={}", BOUNDARY),
    ))
    .set_payload(body)
}

async fn upload_app(
    storage: StorageState,
    max_upload_size: usize,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let mut config = test_config();
    config.max_upload_size = max_upload_size;

    test::init_service(
        App::new()
            .app_data(web::Data::new(config))
            .app_data(web::Data::new(storage))
            .service(web::scope("/api/v1").configure(upload::configure_routes)),
    )
    .await
}

#[actix_rt::test]
async fn test_upload_success_returns_url_envelope() {
    let (storage, calls) = RecordingStorage::new();
    let app = upload_app(StorageState::new(Some(Arc::new(storage))), 1024).await;

    let body = multipart_body(
        BOUNDARY,
        &[
            ("folder", None, None, b"jewellery"),
            ("file", Some("ring.png"), Some("image/png"), b"png-bytes"),
        ],
    );

    let response = test::call_service(&app, multipart_request("/api/v1/uploads", body).to_request()).await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["url"], "https://cdn.test/jewellery/ring.png");
    assert_eq!(body["data"]["provider"], "test");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[actix_rt::test]
async fn test_upload_defaults_folder() {
    let (storage, _calls) = RecordingStorage::new();
    let app = upload_app(StorageState::new(Some(Arc::new(storage))), 1024).await;

    let body = multipart_body(
        BOUNDARY,
        &[("file", Some("ring.png"), Some("image/png"), b"png-bytes")],
    );

    let response = test::call_service(&app, multipart_request("/api/v1/uploads", body).to_request()).await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["url"], "https://cdn.test/uploads/ring.png");
}

#[actix_rt::test]
async fn test_upload_missing_file_is_rejected() {
    let (storage, calls) = RecordingStorage::new();
    let app = upload_app(StorageState::new(Some(Arc::new(storage))), 1024).await;

    let body = multipart_body(BOUNDARY, &[("folder", None, None, b"jewellery")]);

    let response = test::call_service(&app, multipart_request("/api/v1/uploads", body).to_request()).await;
    assert_eq!(response.status(), 400);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "INVALID_INPUT");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[actix_rt::test]
async fn test_oversized_upload_rejected_before_storage_invoked() {
    // 64-byte ceiling, 1KB payload: 413, and the backend must never see it.
    let (storage, calls) = RecordingStorage::new();
    let app = upload_app(StorageState::new(Some(Arc::new(storage))), 64).await;

    let payload = vec![b'x'; 1024];
    let body = multipart_body(
        BOUNDARY,
        &[("file", Some("big.bin"), Some("application/octet-stream"), payload.as_slice())],
    );

    let response = test::call_service(&app, multipart_request("/api/v1/uploads", body).to_request()).await;
    assert_eq!(response.status(), 413);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");
    assert_eq!(calls.load(Ordering::SeqCst), 0, "storage backend was invoked");
}

#[actix_rt::test]
async fn test_upload_without_configured_backend_is_a_server_error() {
    let app = upload_app(StorageState::new(None), 1024).await;

    let body = multipart_body(
        BOUNDARY,
        &[("file", Some("ring.png"), Some("image/png"), b"png-bytes")],
    );

    let response = test::call_service(&app, multipart_request("/api/v1/uploads", body).to_request()).await;
    assert_eq!(response.status(), 500);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "CONFIGURATION_ERROR");
}

#[actix_rt::test]
async fn test_oversized_check_wins_even_when_backend_unconfigured() {
    // Ceiling enforcement happens while draining the stream, before the
    // backend lookup.
    let app = upload_app(StorageState::new(None), 16).await;

    let payload = vec![b'x'; 256];
    let body = multipart_body(
        BOUNDARY,
        &[("file", Some("big.bin"), None, payload.as_slice())],
    );

    let response = test::call_service(&app, multipart_request("/api/v1/uploads", body).to_request()).await;
    assert_eq!(response.status(), 413);
}
