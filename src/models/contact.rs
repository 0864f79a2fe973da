//! Contact form request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::require_non_blank;
use crate::entity::contact;
use crate::error::{AppError, AppResult};

/// Contact form submission.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Validate required fields.
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.full_name, "fullName")?;
        require_non_blank(&self.email, "email")?;
        require_non_blank(&self.message, "message")?;

        if !self.email.contains('@') {
            return Err(AppError::InvalidInput(
                "email must be a valid address".to_string(),
            ));
        }

        Ok(())
    }
}

/// A stored contact submission.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<contact::Model> for ContactResponse {
    fn from(model: contact::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at,
        }
    }
}

/// Acknowledgment returned to the contact form.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactCreated {
    pub message: String,
}
