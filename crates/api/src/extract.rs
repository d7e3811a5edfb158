//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body decoded with `serde_json`.
///
/// Unlike [`axum::Json`], the `Content-Type` header is not checked and every
/// decode failure (syntax, wrong types, truncated body) is rejected as
/// [`AppError::Decode`], i.e. a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {e}")))?;

        let value = serde_json::from_slice(&bytes)?;
        Ok(JsonBody(value))
    }
}
