//! Database queries for contact submissions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::contact::{self, ActiveModel, Column, Entity as Contact};
use crate::error::{AppError, AppResult};
use crate::models::ContactRequest;

use super::DbPool;

impl DbPool {
    /// Insert a new contact submission.
    pub async fn insert_contact(&self, req: &ContactRequest) -> AppResult<contact::Model> {
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            full_name: Set(req.full_name.trim().to_string()),
            email: Set(req.email.trim().to_string()),
            phone: Set(req.phone.clone()),
            subject: Set(req.subject.clone()),
            message: Set(req.message.trim().to_string()),
            created_at: Set(Utc::now()),
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert contact: {}", e)))
    }

    /// List contact submissions, newest first.
    pub async fn list_contacts(&self) -> AppResult<Vec<contact::Model>> {
        Contact::find()
            .order_by_desc(Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list contacts: {}", e)))
    }
}
