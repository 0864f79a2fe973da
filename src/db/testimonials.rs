//! Database queries for testimonials.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::testimonial::{self, ActiveModel, Column, Entity as Testimonial};
use crate::error::{AppError, AppResult};
use crate::models::TestimonialRequest;

use super::DbPool;

impl DbPool {
    /// Insert a new testimonial.
    pub async fn insert_testimonial(
        &self,
        req: &TestimonialRequest,
    ) -> AppResult<testimonial::Model> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(req.name.trim().to_string()),
            quote: Set(req.quote.trim().to_string()),
            rating: Set(req.rating),
            avatar_url: Set(req.avatar_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert testimonial: {}", e)))
    }

    /// List testimonials, newest first.
    pub async fn list_testimonials(&self) -> AppResult<Vec<testimonial::Model>> {
        Testimonial::find()
            .order_by_desc(Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list testimonials: {}", e)))
    }

    /// Update a testimonial. Returns NotFound for an unknown id.
    pub async fn update_testimonial(
        &self,
        id: Uuid,
        req: &TestimonialRequest,
    ) -> AppResult<testimonial::Model> {
        let existing = Testimonial::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to load testimonial: {}", e)))?
            .ok_or_else(|| AppError::NotFound(format!("Testimonial {}", id)))?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(req.name.trim().to_string());
        active.quote = Set(req.quote.trim().to_string());
        active.rating = Set(req.rating);
        active.avatar_url = Set(req.avatar_url.clone());
        active.updated_at = Set(Utc::now());

        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update testimonial: {}", e)))
    }

    /// Delete a testimonial. Returns NotFound for an unknown id.
    pub async fn delete_testimonial(&self, id: Uuid) -> AppResult<()> {
        let result = Testimonial::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete testimonial: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Testimonial {}", id)));
        }

        Ok(())
    }
}
