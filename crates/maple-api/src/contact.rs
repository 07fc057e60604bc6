//! Handler for `/contact`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact` | Body: `{name, email, phone?, address?, message}` |
//! | other  | `/contact` | 405 |

use axum::{
  Json,
  body::Bytes,
  extract::{FromRequest, Request, State},
  http::{Method, StatusCode},
};
use maple_core::{ContactForm, ContactReply, ContactSubmission, SubmissionSink, validate};

use crate::{ContactState, error::ApiError};

/// Contact forms are a few kilobytes at most. Enforced on the router with
/// `DefaultBodyLimit`.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// `POST /contact`
///
/// Validates the form, records it once through the sink, waits the
/// configured delay and replies with the thank-you message. Nothing is
/// recorded for a rejected form.
pub async fn handler<K>(
  State(state): State<ContactState<K>>,
  req: Request,
) -> Result<Json<ContactReply>, ApiError>
where
  K: SubmissionSink + 'static,
{
  if req.method() != Method::POST {
    return Err(ApiError::MethodNotAllowed);
  }

  let body = Bytes::from_request(req, &()).await.map_err(|e| {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
      ApiError::PayloadTooLarge
    } else {
      ApiError::Internal(Box::new(e))
    }
  })?;

  let form = ContactForm::from_json_bytes(&body);
  let valid = validate(form).inspect_err(|r| {
    tracing::debug!(reason = %r, "contact form rejected");
  })?;

  // Production would also send a notification email and a confirmation to
  // the sender here.
  let submission = ContactSubmission::accept(valid);
  state
    .sink
    .record(&submission)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  tokio::time::sleep(state.delay).await;

  Ok(Json(ContactReply::accepted()))
}
