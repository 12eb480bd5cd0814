//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod todo;
pub mod toto;

use crate::shared::error::AppError;

/// Parse a numeric resource id from a path segment.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", resource)))
}
