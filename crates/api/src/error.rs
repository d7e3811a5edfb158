use adora_core::error::CoreError;
use adora_db::error::{RepoError, StoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `adora_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The document store failed. Never exposed to the caller.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The request body is not a valid JSON payload for the target type.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Core(core) => AppError::Core(core),
            RepoError::Store(store) => AppError::Store(store),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidId { value, .. } => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_ID",
                    format!("Invalid id: {value}"),
                ),
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Document store error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::Decode(err) => (
                StatusCode::BAD_REQUEST,
                "DECODE_ERROR",
                format!("Failed to decode JSON body: {err}"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}
