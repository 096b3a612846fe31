//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Storage failures always leave the handler as the production-safe body;
//! `expose_fault_detail` swaps in the underlying error outside production.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;
use crate::state::AppState;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or wrong bearer token (401)
    Unauthorized,

    /// Validation failed (400)
    Validation(ValidationError),

    /// Bookmark not found (404)
    NotFound,

    /// Storage failure (500, logged)
    Storage(DbError),
}

/// Marker attached to 500 responses carrying the storage error text.
#[derive(Debug, Clone)]
pub struct StorageFault(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized request" })),
            )
                .into_response(),
            Self::Validation(e) => {
                tracing::warn!("Rejected bookmark input: {}", e);
                error_message(StatusCode::BAD_REQUEST, &e.to_string())
            }
            Self::NotFound => error_message(StatusCode::NOT_FOUND, "Bookmark does not exist"),
            Self::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                let mut response = error_message(StatusCode::INTERNAL_SERVER_ERROR, "server error");
                response.extensions_mut().insert(StorageFault(e.to_string()));
                response
            }
        }
    }
}

/// `{"error": {"message": ...}}`
fn error_message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}

/// Response mapper: outside production, replace the generic storage error
/// body with the underlying error text.
pub async fn expose_fault_detail(State(state): State<AppState>, response: Response) -> Response {
    if state.config().environment.is_production() {
        return response;
    }

    match response.extensions().get::<StorageFault>() {
        Some(StorageFault(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": detail,
                "error": { "message": detail }
            })),
        )
            .into_response(),
        None => response,
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Storage(e)
    }
}
