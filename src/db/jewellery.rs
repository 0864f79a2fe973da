//! Database queries for jewellery catalogue items.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::jewellery_item::{self, ActiveModel, Column, Entity as JewelleryItem};
use crate::error::{AppError, AppResult};
use crate::models::JewelleryRequest;

use super::DbPool;

fn image_urls_json(urls: &[String]) -> serde_json::Value {
    serde_json::Value::from(urls.to_vec())
}

impl DbPool {
    /// Insert a new catalogue item.
    ///
    /// The secondary image list is stored as submitted; the ≤5 cap is an
    /// admin-form concern.
    pub async fn insert_jewellery_item(
        &self,
        req: &JewelleryRequest,
    ) -> AppResult<jewellery_item::Model> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(req.name.trim().to_string()),
            price: Set(req.price),
            discounted_price: Set(req.discounted_price),
            status: Set(req.status.as_str().to_string()),
            main_image_url: Set(req.main_image_url.clone()),
            other_image_urls: Set(image_urls_json(&req.other_image_urls)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert jewellery item: {}", e)))
    }

    /// List catalogue items, newest first.
    pub async fn list_jewellery_items(&self) -> AppResult<Vec<jewellery_item::Model>> {
        JewelleryItem::find()
            .order_by_desc(Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list jewellery items: {}", e)))
    }

    /// Update a catalogue item. Returns NotFound for an unknown id.
    pub async fn update_jewellery_item(
        &self,
        id: Uuid,
        req: &JewelleryRequest,
    ) -> AppResult<jewellery_item::Model> {
        let existing = JewelleryItem::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to load jewellery item: {}", e)))?
            .ok_or_else(|| AppError::NotFound(format!("Jewellery item {}", id)))?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(req.name.trim().to_string());
        active.price = Set(req.price);
        active.discounted_price = Set(req.discounted_price);
        active.status = Set(req.status.as_str().to_string());
        active.main_image_url = Set(req.main_image_url.clone());
        active.other_image_urls = Set(image_urls_json(&req.other_image_urls));
        active.updated_at = Set(Utc::now());

        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update jewellery item: {}", e)))
    }

    /// Delete a catalogue item. Returns NotFound for an unknown id.
    pub async fn delete_jewellery_item(&self, id: Uuid) -> AppResult<()> {
        let result = JewelleryItem::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete jewellery item: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Jewellery item {}", id)));
        }

        Ok(())
    }
}
