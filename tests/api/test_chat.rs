//! Chat endpoint tests: canned replies, keyword ordering, validation.

use actix_web::{App, test, web};
use serde_json::{Value, json};

use yaritu_server::api::chat;
use yaritu_server::services::ChatService;
use yaritu_server::services::chat::{GREETING_REPLY, OFFER_REPLY, PRICE_REPLY};

use crate::test_helpers::test_config;

async fn chat_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    // No completion key configured: replies are always canned.
    let service = ChatService::new(test_config().chat);

    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .service(web::scope("/api/v1").configure(chat::configure_routes)),
    )
    .await
}

async fn send_chat(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    message: &str,
) -> Value {
    let request = test::TestRequest::post()
        .uri("/api/v1/chat")
        .set_json(json!({ "message": message }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), 200);
    test::read_body_json(response).await
}

#[actix_rt::test]
async fn test_greeting_checked_before_price() {
    // The message matches both groups; the greeting branch is checked
    // first, so the greeting reply must win.
    let app = chat_app().await;
    let body = send_chat(&app, "Hi there, what's the price?").await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["reply"], GREETING_REPLY);
}

#[actix_rt::test]
async fn test_price_reply() {
    let app = chat_app().await;
    let body = send_chat(&app, "how much does the choker cost?").await;
    assert_eq!(body["data"]["reply"], PRICE_REPLY);
}

#[actix_rt::test]
async fn test_offer_reply() {
    let app = chat_app().await;
    let body = send_chat(&app, "is there a festive sale?").await;
    assert_eq!(body["data"]["reply"], OFFER_REPLY);
}

#[actix_rt::test]
async fn test_unmatched_message_gets_acknowledgment_echo() {
    let app = chat_app().await;
    let body = send_chat(&app, "do you engrave initials?").await;

    let reply = body["data"]["reply"].as_str().unwrap();
    assert!(reply.contains("do you engrave initials?"));
}

#[actix_rt::test]
async fn test_blank_message_is_rejected() {
    let app = chat_app().await;

    let request = test::TestRequest::post()
        .uri("/api/v1/chat")
        .set_json(json!({ "message": "   " }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "INVALID_INPUT");
}
