//! Video request/response types, shared by the trending and celebrity
//! collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::require_non_blank;
use crate::entity::{celebrity_video, trending_video};
use crate::error::AppResult;

/// Create payload for a video entry.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    pub title: String,
    /// Pre-uploaded video URL, stored as-is
    pub video_url: String,
}

impl VideoRequest {
    /// Validate required fields.
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.title, "title")?;
        require_non_blank(&self.video_url, "videoUrl")?;
        Ok(())
    }
}

/// A stored video entry.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: Uuid,
    pub title: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<trending_video::Model> for VideoResponse {
    fn from(model: trending_video::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            video_url: model.video_url,
            created_at: model.created_at,
        }
    }
}

impl From<celebrity_video::Model> for VideoResponse {
    fn from(model: celebrity_video::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            video_url: model.video_url,
            created_at: model.created_at,
        }
    }
}
