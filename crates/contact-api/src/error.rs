//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Each handler picks the variant its endpoint's failure contract calls for,
//! so the same core error can surface differently depending on the route.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Submission rejected by validation or unreadable JSON.
  #[error("invalid submission: {0}")]
  Invalid(String),

  /// A query string the handler cannot act on. Empty body.
  #[error("bad request")]
  BadRequest,

  /// Create failed; the cause is echoed to the client.
  #[error("failed to save contact: {0}")]
  SaveFailed(String),

  #[error("failed to delete contact")]
  DeleteFailed,

  /// Empty-body 404.
  #[error("not found")]
  NotFound,

  /// Empty-body 500.
  #[error("internal error")]
  Internal,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Invalid(error) => (
        StatusCode::BAD_REQUEST,
        Json(json!({
          "success": false,
          "message": "Invalid contact submission",
          "error":   error,
        })),
      )
        .into_response(),
      ApiError::SaveFailed(error) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
          "success": false,
          "message": "Failed to save contact message",
          "error":   error,
        })),
      )
        .into_response(),
      ApiError::DeleteFailed => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
          "success": false,
          "message": "Failed to delete contact",
        })),
      )
        .into_response(),
      ApiError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
      ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
      ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
  }
}
