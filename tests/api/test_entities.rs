//! Entity CRUD tests: round-trip field fidelity, not-found handling, and
//! the client-side-only cap on jewellery secondary images.

use actix_web::{App, test, web};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use uuid::Uuid;

use yaritu_server::api::{jewellery, testimonials, videos};
use yaritu_server::db::DbPool;
use yaritu_server::entity::{jewellery_item, testimonial, trending_video};

use crate::test_helpers::test_config;

async fn entity_app(
    pool: DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(test_config()))
            .app_data(web::Data::new(pool))
            .service(
                web::scope("/api/v1")
                    .configure(testimonials::configure_routes)
                    .configure(videos::configure_routes)
                    .configure(jewellery::configure_routes),
            ),
    )
    .await
}

fn testimonial_row() -> testimonial::Model {
    let now = Utc::now();
    testimonial::Model {
        id: Uuid::now_v7(),
        name: "Meera".to_string(),
        quote: "The necklace arrived beautifully packed.".to_string(),
        rating: 5,
        avatar_url: Some("https://cdn.example/meera.jpg".to_string()),
        created_at: now,
        updated_at: now,
    }
}

#[actix_rt::test]
async fn test_testimonial_create_returns_submitted_fields() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![testimonial_row()]])
        .into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/testimonials")
        .set_json(json!({
            "name": "Meera",
            "quote": "The necklace arrived beautifully packed.",
            "rating": 5,
            "avatarUrl": "https://cdn.example/meera.jpg"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 201);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    // Submitted fields come back exactly; id and timestamps are
    // server-assigned.
    assert_eq!(body["data"]["name"], "Meera");
    assert_eq!(body["data"]["quote"], "The necklace arrived beautifully packed.");
    assert_eq!(body["data"]["rating"], 5);
    assert_eq!(body["data"]["avatarUrl"], "https://cdn.example/meera.jpg");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[actix_rt::test]
async fn test_testimonial_invalid_rating_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/testimonials")
        .set_json(json!({ "name": "Meera", "quote": "Lovely", "rating": 9 }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
}

#[actix_rt::test]
async fn test_testimonial_delete_unknown_id_is_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/testimonials/{}", Uuid::now_v7()))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 404);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_trending_video_list() {
    let rows = vec![trending_video::Model {
        id: Uuid::now_v7(),
        title: "Festive collection".to_string(),
        video_url: "https://cdn.example/festive.mp4".to_string(),
        created_at: Utc::now(),
    }];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([rows])
        .into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::get()
        .uri("/api/v1/videos/trending")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"][0]["title"], "Festive collection");
    assert_eq!(body["data"][0]["videoUrl"], "https://cdn.example/festive.mp4");
}

#[actix_rt::test]
async fn test_video_create_requires_title() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/videos/celebrity")
        .set_json(json!({ "title": "", "videoUrl": "https://cdn.example/v.mp4" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
}

fn jewellery_row(other_image_urls: &[String]) -> jewellery_item::Model {
    let now = Utc::now();
    jewellery_item::Model {
        id: Uuid::now_v7(),
        name: "Kundan choker".to_string(),
        price: 1499.0,
        discounted_price: Some(1299.0),
        status: "Available".to_string(),
        main_image_url: "https://cdn.example/choker.jpg".to_string(),
        other_image_urls: serde_json::Value::from(other_image_urls.to_vec()),
        created_at: now,
        updated_at: now,
    }
}

#[actix_rt::test]
async fn test_jewellery_create_accepts_six_secondary_images() {
    // The ≤5 cap is enforced in the admin form only. A six-image payload
    // must pass the server untouched; this documents the gap.
    let urls: Vec<String> = (0..6)
        .map(|i| format!("https://cdn.example/img-{}.jpg", i))
        .collect();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![jewellery_row(&urls)]])
        .into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/jewellery")
        .set_json(json!({
            "name": "Kundan choker",
            "price": 1499.0,
            "discountedPrice": 1299.0,
            "status": "Available",
            "mainImageUrl": "https://cdn.example/choker.jpg",
            "otherImageUrls": urls
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 201);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["otherImageUrls"].as_array().unwrap().len(), 6);
}

#[actix_rt::test]
async fn test_jewellery_create_round_trips_fields() {
    let urls = vec!["https://cdn.example/choker-2.jpg".to_string()];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![jewellery_row(&urls)]])
        .into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/jewellery")
        .set_json(json!({
            "name": "Kundan choker",
            "price": 1499.0,
            "discountedPrice": 1299.0,
            "status": "Available",
            "mainImageUrl": "https://cdn.example/choker.jpg",
            "otherImageUrls": urls
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 201);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["name"], "Kundan choker");
    assert_eq!(body["data"]["price"], 1499.0);
    assert_eq!(body["data"]["discountedPrice"], 1299.0);
    assert_eq!(body["data"]["status"], "Available");
    assert_eq!(body["data"]["mainImageUrl"], "https://cdn.example/choker.jpg");
}

#[actix_rt::test]
async fn test_jewellery_update_round_trips_through_find_and_update() {
    let urls = vec!["https://cdn.example/choker-2.jpg".to_string()];
    let existing = jewellery_row(&urls);
    let mut updated = existing.clone();
    updated.status = "Out of Stock".to_string();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing.clone()]]) // find_by_id
        .append_query_results([vec![updated]]) // update returning
        .into_connection();
    let app = entity_app(DbPool::from(db)).await;

    let request = test::TestRequest::put()
        .uri(&format!("/api/v1/jewellery/{}", existing.id))
        .set_json(json!({
            "name": "Kundan choker",
            "price": 1499.0,
            "discountedPrice": 1299.0,
            "status": "Out of Stock",
            "mainImageUrl": "https://cdn.example/choker.jpg",
            "otherImageUrls": urls
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["status"], "Out of Stock");
}
