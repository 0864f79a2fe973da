//! Jewellery catalogue request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::require_non_blank;
use crate::entity::jewellery_item;
use crate::error::{AppError, AppResult};

/// Stock status of a catalogue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum JewelleryStatus {
    Available,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl JewelleryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OutOfStock => "Out of Stock",
            Self::ComingSoon => "Coming Soon",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(Self::Available),
            "Out of Stock" => Some(Self::OutOfStock),
            "Coming Soon" => Some(Self::ComingSoon),
            _ => None,
        }
    }
}

/// Create/update payload for a jewellery item.
///
/// The admin form limits `otherImageUrls` to 5 entries; the server does not,
/// and stores the list as submitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JewelleryRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    pub status: JewelleryStatus,
    /// Pre-uploaded main image URL, stored as-is
    pub main_image_url: String,
    /// Pre-uploaded secondary image URLs, stored as-is
    #[serde(default)]
    pub other_image_urls: Vec<String>,
}

impl JewelleryRequest {
    /// Validate required fields.
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.name, "name")?;
        require_non_blank(&self.main_image_url, "mainImageUrl")?;

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::InvalidInput(
                "price must be a non-negative number".to_string(),
            ));
        }

        if let Some(discounted) = self.discounted_price
            && (!discounted.is_finite() || discounted < 0.0)
        {
            return Err(AppError::InvalidInput(
                "discountedPrice must be a non-negative number".to_string(),
            ));
        }

        Ok(())
    }
}

/// A stored jewellery item.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JewelleryResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub discounted_price: Option<f64>,
    pub status: JewelleryStatus,
    pub main_image_url: String,
    pub other_image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<jewellery_item::Model> for JewelleryResponse {
    fn from(model: jewellery_item::Model) -> Self {
        // The status column is CHECK-constrained to the three variants.
        let status =
            JewelleryStatus::parse(&model.status).unwrap_or(JewelleryStatus::Available);
        let other_image_urls =
            serde_json::from_value(model.other_image_urls).unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            discounted_price: model.discounted_price,
            status,
            main_image_url: model.main_image_url,
            other_image_urls,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
