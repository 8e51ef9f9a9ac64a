use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use playground_core::error::CoreError;

/// Error type returned by every handler.
///
/// Domain failures arrive as [`CoreError`]; anything the store reports
/// surfaces as [`sqlx::Error`]. Conversion to HTTP happens in one place,
/// and every error body has the same `{ "msg": ... }` shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found: {key}"))
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            AppError::Core(CoreError::Internal(detail)) => {
                // The detail may name internal state; log it, answer generically.
                tracing::error!(error = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
            AppError::Database(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, "resource not found".to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "msg": msg }))).into_response()
    }
}
