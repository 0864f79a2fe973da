//! Database queries for the trending and celebrity video collections.
//!
//! The two collections have the same shape but independent lifecycles, so
//! the methods stay separate rather than merging into one table.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::celebrity_video::{
    self, ActiveModel as CelebrityActiveModel, Entity as CelebrityVideo,
};
use crate::entity::trending_video::{
    self, ActiveModel as TrendingActiveModel, Entity as TrendingVideo,
};
use crate::error::{AppError, AppResult};
use crate::models::VideoRequest;

use super::DbPool;

impl DbPool {
    /// Insert a trending video entry.
    pub async fn insert_trending_video(
        &self,
        req: &VideoRequest,
    ) -> AppResult<trending_video::Model> {
        let model = TrendingActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(req.title.trim().to_string()),
            video_url: Set(req.video_url.clone()),
            created_at: Set(Utc::now()),
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert trending video: {}", e)))
    }

    /// List trending videos, newest first.
    pub async fn list_trending_videos(&self) -> AppResult<Vec<trending_video::Model>> {
        TrendingVideo::find()
            .order_by_desc(trending_video::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list trending videos: {}", e)))
    }

    /// Delete a trending video. Returns NotFound for an unknown id.
    pub async fn delete_trending_video(&self, id: Uuid) -> AppResult<()> {
        let result = TrendingVideo::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete trending video: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Trending video {}", id)));
        }

        Ok(())
    }

    /// Insert a celebrity video entry.
    pub async fn insert_celebrity_video(
        &self,
        req: &VideoRequest,
    ) -> AppResult<celebrity_video::Model> {
        let model = CelebrityActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(req.title.trim().to_string()),
            video_url: Set(req.video_url.clone()),
            created_at: Set(Utc::now()),
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert celebrity video: {}", e)))
    }

    /// List celebrity videos, newest first.
    pub async fn list_celebrity_videos(&self) -> AppResult<Vec<celebrity_video::Model>> {
        CelebrityVideo::find()
            .order_by_desc(celebrity_video::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list celebrity videos: {}", e)))
    }

    /// Delete a celebrity video. Returns NotFound for an unknown id.
    pub async fn delete_celebrity_video(&self, id: Uuid) -> AppResult<()> {
        let result = CelebrityVideo::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete celebrity video: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Celebrity video {}", id)));
        }

        Ok(())
    }
}
