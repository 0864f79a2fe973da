//! The uniform success envelope.
//!
//! Every successful response is `{ "success": true, "data": ... }`; the
//! failure half lives in [`crate::error::ErrorResponse`]. One type, one
//! serialization boundary.

use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping a response payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    /// Always true
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
