//! Contact endpoint tests: persist-then-notify ordering and the admin gate.

use actix_web::{App, test, web};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase};
use secrecy::SecretString;
use serde_json::{Value, json};
use uuid::Uuid;

use yaritu_server::api::contacts;
use yaritu_server::config::{Config, SmtpSettings};
use yaritu_server::db::DbPool;
use yaritu_server::entity::contact;
use yaritu_server::services::Notifier;

use crate::test_helpers::{TEST_ADMIN_KEY, test_config};

fn stored_submission() -> contact::Model {
    contact::Model {
        id: Uuid::now_v7(),
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: None,
        subject: Some("Custom order".to_string()),
        message: "Do you ship abroad?".to_string(),
        created_at: Utc::now(),
    }
}

/// SMTP settings pointing at closed ports: every send attempt fails.
fn unreachable_smtp() -> SmtpSettings {
    SmtpSettings {
        host: "127.0.0.1".to_string(),
        port: 1,
        username: "mailer".to_string(),
        password: SecretString::from("password"),
        fallback_host: "127.0.0.1".to_string(),
        from_address: "Yaritu <no-reply@yaritu.example>".to_string(),
        notify_address: "owner@yaritu.example".to_string(),
    }
}

async fn contacts_app(
    config: Config,
    pool: DbPool,
    notifier: Notifier,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(config))
            .app_data(web::Data::new(pool))
            .app_data(web::Data::new(notifier))
            .service(web::scope("/api/v1").configure(contacts::configure_routes)),
    )
    .await
}

#[actix_rt::test]
async fn test_submission_persists_even_when_notifier_unreachable() {
    // Persist-then-notify: the insert decides the 201; the failed email is
    // only logged.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_submission()]])
        .into_connection();
    let notifier = Notifier::from_config(Some(&unreachable_smtp())).unwrap();

    let app = contacts_app(test_config(), DbPool::from(db), notifier).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/contacts")
        .set_json(json!({
            "fullName": "Asha Rao",
            "email": "asha@example.com",
            "subject": "Custom order",
            "message": "Do you ship abroad?"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 201);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["message"].as_str().unwrap().contains("Thanks"));
}

#[actix_rt::test]
async fn test_missing_message_is_rejected_before_persistence() {
    // No query results queued: reaching the database would error the mock.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = contacts_app(test_config(), DbPool::from(db), Notifier::disabled()).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/contacts")
        .set_json(json!({
            "fullName": "Asha Rao",
            "email": "asha@example.com",
            "message": ""
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_listing_requires_admin_key_when_configured() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_submission()]])
        .into_connection();

    let mut config = test_config();
    config.admin_key = Some(TEST_ADMIN_KEY.to_string());

    let app = contacts_app(config, DbPool::from(db), Notifier::disabled()).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/contacts")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 401);

    let request = test::TestRequest::get()
        .uri("/api/v1/contacts")
        .insert_header(("X-Admin-Key", TEST_ADMIN_KEY))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["fullName"], "Asha Rao");
}
