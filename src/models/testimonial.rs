//! Testimonial request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::require_non_blank;
use crate::entity::testimonial;
use crate::error::{AppError, AppResult};

/// Create/update payload for a testimonial.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialRequest {
    pub name: String,
    pub quote: String,
    /// 1 to 5 stars
    pub rating: i16,
    /// Pre-uploaded avatar URL, stored as-is
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl TestimonialRequest {
    /// Validate required fields and the rating range.
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.name, "name")?;
        require_non_blank(&self.quote, "quote")?;

        if !(1..=5).contains(&self.rating) {
            return Err(AppError::InvalidInput(
                "rating must be between 1 and 5".to_string(),
            ));
        }

        Ok(())
    }
}

/// A stored testimonial.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialResponse {
    pub id: Uuid,
    pub name: String,
    pub quote: String,
    pub rating: i16,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<testimonial::Model> for TestimonialResponse {
    fn from(model: testimonial::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quote: model.quote,
            rating: model.rating,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
