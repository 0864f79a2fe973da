//! Chat API handler.

use actix_web::{HttpResponse, post, web};

use crate::error::{AppError, AppResult};
use crate::models::{ChatData, ChatRequest, Envelope};
use crate::services::ChatService;

/// Configure chat routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(chat);
}

/// Answer a chat message.
///
/// POST /chat
///
/// Stateless request/response; on completion-API failure or absence the
/// reply degrades to a canned response rather than failing.
#[utoipa::path(
    post,
    path = "/api/v1/chat",
    tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply", body = Envelope<ChatData>),
        (status = 400, description = "Missing message", body = crate::error::ErrorResponse),
    )
)]
#[post("/chat")]
pub async fn chat(
    service: web::Data<ChatService>,
    body: web::Json<ChatRequest>,
) -> AppResult<HttpResponse> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing required field: message".to_string(),
        ));
    }

    let reply = service.reply(message).await;

    Ok(HttpResponse::Ok().json(Envelope::ok(ChatData { reply })))
}
