//! Custom Extractors
//!
//! Request body parsing that reports failures through `AppError`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::shared::error::AppError;
use crate::shared::validation::validate_body;

/// JSON request body, deserialized and validated.
///
/// The `Content-Type` header is not checked. Malformed or incomplete bodies
/// become `AppError::BadRequest`, constraint violations `AppError::Validation`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let Json(value) = Json::<T>::from_bytes(&bytes)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        validate_body(&value)?;

        Ok(Self(value))
    }
}
