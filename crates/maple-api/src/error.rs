//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use maple_core::{
  ContactReply, Rejection,
  reply::{BODY_TOO_LARGE, METHOD_NOT_ALLOWED},
};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("method not allowed")]
  MethodNotAllowed,

  #[error("request body too large")]
  PayloadTooLarge,

  #[error("rejected: {0}")]
  Rejected(#[from] Rejection),

  /// Anything unexpected. Logged here; the client only sees the generic
  /// fault reply.
  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::MethodNotAllowed => (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(ContactReply::plain(METHOD_NOT_ALLOWED)),
      )
        .into_response(),
      ApiError::PayloadTooLarge => {
        tracing::warn!(limit = crate::contact::MAX_BODY_BYTES, "contact body too large");
        (StatusCode::PAYLOAD_TOO_LARGE, Json(ContactReply::plain(BODY_TOO_LARGE)))
          .into_response()
      }
      ApiError::Rejected(r) => {
        (StatusCode::BAD_REQUEST, Json(ContactReply::plain(r.to_string())))
          .into_response()
      }
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "contact form error");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ContactReply::fault()))
          .into_response()
      }
    }
  }
}
