//! Admin gate for mutating endpoints.
//!
//! The storefront's admin surface sends a shared key in the `X-Admin-Key`
//! header. When no key is configured the gate is open, which matches the
//! development setup; production deployments set `YARITU_ADMIN_KEY`.

use actix_web::HttpRequest;
use subtle::ConstantTimeEq;

use crate::config::{ADMIN_KEY_HEADER, Config};
use crate::error::{AppError, AppResult};

/// Require the admin key on a request, when one is configured.
///
/// Comparison is constant-time so the key cannot be probed byte by byte.
pub fn require_admin(req: &HttpRequest, config: &Config) -> AppResult<()> {
    let Some(expected) = config.admin_key.as_deref() else {
        return Ok(());
    };

    let provided = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if bool::from(key.as_bytes().ct_eq(expected.as_bytes())) => Ok(()),
        Some(_) => Err(AppError::Unauthorized("Invalid admin key".to_string())),
        None => Err(AppError::Unauthorized(format!(
            "Missing admin key. Provide the {} header.",
            ADMIN_KEY_HEADER
        ))),
    }
}
