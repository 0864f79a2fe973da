//! Domain models and API request/response types.

pub mod chat;
pub mod contact;
pub mod envelope;
pub mod jewellery;
pub mod testimonial;
pub mod upload_slot;
pub mod video;

// Re-export commonly used types
pub use chat::{ChatData, ChatRequest};
pub use contact::{ContactCreated, ContactRequest, ContactResponse};
pub use envelope::Envelope;
pub use jewellery::{JewelleryRequest, JewelleryResponse, JewelleryStatus};
pub use testimonial::{TestimonialRequest, TestimonialResponse};
pub use upload_slot::{InvalidTransition, UploadSlot};
pub use video::{VideoRequest, VideoResponse};

use crate::error::{AppError, AppResult};

/// Reject blank required text fields with a uniform message.
pub(crate) fn require_non_blank(value: &str, field: &'static str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Missing required field: {}",
            field
        )));
    }
    Ok(())
}
