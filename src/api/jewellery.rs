//! Jewellery catalogue API handlers.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;
use uuid::Uuid;

use crate::auth::require_admin;
use crate::config::Config;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Envelope, JewelleryRequest, JewelleryResponse};

/// Configure jewellery routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_items)
        .service(create_item)
        .service(update_item)
        .service(delete_item);
}

/// List catalogue items, newest first.
///
/// GET /jewellery
#[utoipa::path(
    get,
    path = "/api/v1/jewellery",
    tag = "Jewellery",
    responses(
        (status = 200, description = "Catalogue items", body = Envelope<Vec<JewelleryResponse>>),
    )
)]
#[get("/jewellery")]
pub async fn list_items(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.list_jewellery_items().await?;
    let data: Vec<JewelleryResponse> = rows.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(Envelope::ok(data)))
}

/// Create a catalogue item.
///
/// POST /jewellery (admin)
///
/// Image URLs are stored as submitted; the secondary-image count cap lives
/// in the admin form, not here.
#[utoipa::path(
    post,
    path = "/api/v1/jewellery",
    tag = "Jewellery",
    request_body = JewelleryRequest,
    responses(
        (status = 201, description = "Item created", body = Envelope<JewelleryResponse>),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[post("/jewellery")]
pub async fn create_item(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    body: web::Json<JewelleryRequest>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let payload = body.into_inner();
    payload.validate()?;

    let created = pool.insert_jewellery_item(&payload).await?;
    info!("Jewellery item {} created", created.id);

    Ok(HttpResponse::Created().json(Envelope::ok(JewelleryResponse::from(created))))
}

/// Update a catalogue item.
///
/// PUT /jewellery/{id} (admin)
#[utoipa::path(
    put,
    path = "/api/v1/jewellery/{id}",
    tag = "Jewellery",
    params(
        ("id" = Uuid, Path, description = "Item id")
    ),
    request_body = JewelleryRequest,
    responses(
        (status = 200, description = "Item updated", body = Envelope<JewelleryResponse>),
        (status = 404, description = "Unknown id", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[put("/jewellery/{id}")]
pub async fn update_item(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<JewelleryRequest>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let payload = body.into_inner();
    payload.validate()?;

    let updated = pool
        .update_jewellery_item(path.into_inner(), &payload)
        .await?;
    info!("Jewellery item {} updated", updated.id);

    Ok(HttpResponse::Ok().json(Envelope::ok(JewelleryResponse::from(updated))))
}

/// Delete a catalogue item.
///
/// DELETE /jewellery/{id} (admin)
///
/// The objects behind the item's image URLs are left in place.
#[utoipa::path(
    delete,
    path = "/api/v1/jewellery/{id}",
    tag = "Jewellery",
    params(
        ("id" = Uuid, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = Envelope<serde_json::Value>),
        (status = 404, description = "Unknown id", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[delete("/jewellery/{id}")]
pub async fn delete_item(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let id = path.into_inner();
    pool.delete_jewellery_item(id).await?;
    info!("Jewellery item {} deleted", id);

    Ok(HttpResponse::Ok().json(Envelope::ok(serde_json::json!({ "deleted": id }))))
}
