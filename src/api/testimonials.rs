//! Testimonial API handlers.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;
use uuid::Uuid;

use crate::auth::require_admin;
use crate::config::Config;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Envelope, TestimonialRequest, TestimonialResponse};

/// Configure testimonial routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_testimonials)
        .service(create_testimonial)
        .service(update_testimonial)
        .service(delete_testimonial);
}

/// List testimonials, newest first.
///
/// GET /testimonials
#[utoipa::path(
    get,
    path = "/api/v1/testimonials",
    tag = "Testimonials",
    responses(
        (status = 200, description = "Testimonials", body = Envelope<Vec<TestimonialResponse>>),
    )
)]
#[get("/testimonials")]
pub async fn list_testimonials(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.list_testimonials().await?;
    let data: Vec<TestimonialResponse> = rows.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(Envelope::ok(data)))
}

/// Create a testimonial.
///
/// POST /testimonials (admin)
#[utoipa::path(
    post,
    path = "/api/v1/testimonials",
    tag = "Testimonials",
    request_body = TestimonialRequest,
    responses(
        (status = 201, description = "Testimonial created", body = Envelope<TestimonialResponse>),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid admin key", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[post("/testimonials")]
pub async fn create_testimonial(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    body: web::Json<TestimonialRequest>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let payload = body.into_inner();
    payload.validate()?;

    let created = pool.insert_testimonial(&payload).await?;
    info!("Testimonial {} created", created.id);

    Ok(HttpResponse::Created().json(Envelope::ok(TestimonialResponse::from(created))))
}

/// Update a testimonial.
///
/// PUT /testimonials/{id} (admin)
#[utoipa::path(
    put,
    path = "/api/v1/testimonials/{id}",
    tag = "Testimonials",
    params(
        ("id" = Uuid, Path, description = "Testimonial id")
    ),
    request_body = TestimonialRequest,
    responses(
        (status = 200, description = "Testimonial updated", body = Envelope<TestimonialResponse>),
        (status = 404, description = "Unknown id", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[put("/testimonials/{id}")]
pub async fn update_testimonial(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<TestimonialRequest>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let payload = body.into_inner();
    payload.validate()?;

    let updated = pool.update_testimonial(path.into_inner(), &payload).await?;
    info!("Testimonial {} updated", updated.id);

    Ok(HttpResponse::Ok().json(Envelope::ok(TestimonialResponse::from(updated))))
}

/// Delete a testimonial.
///
/// DELETE /testimonials/{id} (admin)
#[utoipa::path(
    delete,
    path = "/api/v1/testimonials/{id}",
    tag = "Testimonials",
    params(
        ("id" = Uuid, Path, description = "Testimonial id")
    ),
    responses(
        (status = 200, description = "Testimonial deleted", body = Envelope<serde_json::Value>),
        (status = 404, description = "Unknown id", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[delete("/testimonials/{id}")]
pub async fn delete_testimonial(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let id = path.into_inner();
    pool.delete_testimonial(id).await?;
    info!("Testimonial {} deleted", id);

    Ok(HttpResponse::Ok().json(Envelope::ok(serde_json::json!({ "deleted": id }))))
}
