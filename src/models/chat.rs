//! Chat endpoint request/response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A chat message from the storefront widget.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

/// The assistant's reply.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatData {
    pub reply: String,
}
