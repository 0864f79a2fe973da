//! Contact form API handlers.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::{info, warn};

use crate::auth::require_admin;
use crate::config::Config;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{ContactCreated, ContactRequest, ContactResponse, Envelope};
use crate::services::Notifier;

/// Configure contact routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_contacts).service(create_contact);
}

/// List contact submissions, newest first.
///
/// GET /contacts (admin)
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    tag = "Contacts",
    responses(
        (status = 200, description = "Contact submissions", body = Envelope<Vec<ContactResponse>>),
        (status = 401, description = "Missing or invalid admin key", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[get("/contacts")]
pub async fn list_contacts(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let contacts = pool.list_contacts().await?;
    let data: Vec<ContactResponse> = contacts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(Envelope::ok(data)))
}

/// Create a contact submission and notify the store.
///
/// POST /contacts
///
/// Persistence is the authoritative success signal: once the row is stored
/// the 201 is decided, and the email notification afterwards is best-effort.
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    tag = "Contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Submission stored", body = Envelope<ContactCreated>),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::error::ErrorResponse),
    )
)]
#[post("/contacts")]
pub async fn create_contact(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<ContactRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let submission = pool.insert_contact(&req).await?;
    info!("Contact {} created", submission.id);

    if let Err(e) = notifier.contact_alert(&submission).await {
        warn!("Contact notification failed for {}: {}", submission.id, e);
    }

    Ok(HttpResponse::Created().json(Envelope::ok(ContactCreated {
        message: "Thanks for reaching out. We will get back to you soon.".to_string(),
    })))
}
