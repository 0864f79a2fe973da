//! Video collection API handlers (trending and celebrity).
//!
//! Two collections with the same shape and independent lifecycles. Video
//! bytes live in external storage; entries only carry the URL string.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use tracing::info;
use uuid::Uuid;

use crate::auth::require_admin;
use crate::config::Config;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Envelope, VideoRequest, VideoResponse};

/// Configure video routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_trending)
        .service(create_trending)
        .service(delete_trending)
        .service(list_celebrity)
        .service(create_celebrity)
        .service(delete_celebrity);
}

/// List trending videos, newest first.
///
/// GET /videos/trending
#[utoipa::path(
    get,
    path = "/api/v1/videos/trending",
    tag = "Videos",
    responses(
        (status = 200, description = "Trending videos", body = Envelope<Vec<VideoResponse>>),
    )
)]
#[get("/videos/trending")]
pub async fn list_trending(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.list_trending_videos().await?;
    let data: Vec<VideoResponse> = rows.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(Envelope::ok(data)))
}

/// Create a trending video entry.
///
/// POST /videos/trending (admin)
#[utoipa::path(
    post,
    path = "/api/v1/videos/trending",
    tag = "Videos",
    request_body = VideoRequest,
    responses(
        (status = 201, description = "Video created", body = Envelope<VideoResponse>),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[post("/videos/trending")]
pub async fn create_trending(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    body: web::Json<VideoRequest>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let payload = body.into_inner();
    payload.validate()?;

    let created = pool.insert_trending_video(&payload).await?;
    info!("Trending video {} created", created.id);

    Ok(HttpResponse::Created().json(Envelope::ok(VideoResponse::from(created))))
}

/// Delete a trending video entry.
///
/// DELETE /videos/trending/{id} (admin)
#[utoipa::path(
    delete,
    path = "/api/v1/videos/trending/{id}",
    tag = "Videos",
    params(
        ("id" = Uuid, Path, description = "Video id")
    ),
    responses(
        (status = 200, description = "Video deleted", body = Envelope<serde_json::Value>),
        (status = 404, description = "Unknown id", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[delete("/videos/trending/{id}")]
pub async fn delete_trending(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let id = path.into_inner();
    pool.delete_trending_video(id).await?;
    info!("Trending video {} deleted", id);

    Ok(HttpResponse::Ok().json(Envelope::ok(serde_json::json!({ "deleted": id }))))
}

/// List celebrity videos, newest first.
///
/// GET /videos/celebrity
#[utoipa::path(
    get,
    path = "/api/v1/videos/celebrity",
    tag = "Videos",
    responses(
        (status = 200, description = "Celebrity videos", body = Envelope<Vec<VideoResponse>>),
    )
)]
#[get("/videos/celebrity")]
pub async fn list_celebrity(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.list_celebrity_videos().await?;
    let data: Vec<VideoResponse> = rows.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(Envelope::ok(data)))
}

/// Create a celebrity video entry.
///
/// POST /videos/celebrity (admin)
#[utoipa::path(
    post,
    path = "/api/v1/videos/celebrity",
    tag = "Videos",
    request_body = VideoRequest,
    responses(
        (status = 201, description = "Video created", body = Envelope<VideoResponse>),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[post("/videos/celebrity")]
pub async fn create_celebrity(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    body: web::Json<VideoRequest>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let payload = body.into_inner();
    payload.validate()?;

    let created = pool.insert_celebrity_video(&payload).await?;
    info!("Celebrity video {} created", created.id);

    Ok(HttpResponse::Created().json(Envelope::ok(VideoResponse::from(created))))
}

/// Delete a celebrity video entry.
///
/// DELETE /videos/celebrity/{id} (admin)
#[utoipa::path(
    delete,
    path = "/api/v1/videos/celebrity/{id}",
    tag = "Videos",
    params(
        ("id" = Uuid, Path, description = "Video id")
    ),
    responses(
        (status = 200, description = "Video deleted", body = Envelope<serde_json::Value>),
        (status = 404, description = "Unknown id", body = crate::error::ErrorResponse),
    ),
    security(
        ("admin_key" = [])
    )
)]
#[delete("/videos/celebrity/{id}")]
pub async fn delete_celebrity(
    req: HttpRequest,
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    require_admin(&req, &config)?;

    let id = path.into_inner();
    pool.delete_celebrity_video(id).await?;
    info!("Celebrity video {} deleted", id);

    Ok(HttpResponse::Ok().json(Envelope::ok(serde_json::json!({ "deleted": id }))))
}
