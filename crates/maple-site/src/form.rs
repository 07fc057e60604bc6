//! `POST /contact`: the contact form for browsers without script.
//!
//! The posted fields go through the same [`FormState`] logic as any other
//! front end, delivered to the JSON handler in process, and the page is
//! rendered again showing the outcome.

use axum::{
  Form, Router,
  body::Body,
  extract::{State, rejection::FormRejection},
  http::{Method, Request, StatusCode, header},
  response::Html,
};
use maple_core::{
  ContactReply, ContactTransport, FormFields, FormState, Status, TransportError,
  form::FALLBACK_FAILURE,
};
use tower::ServiceExt as _;

use crate::{AppState, error::Error, page};

/// Sends form fields to the API router without a network hop.
pub struct InProcessTransport {
  api: Router,
}

impl InProcessTransport {
  /// `api` must serve `/api/contact`.
  pub fn new(api: Router) -> Self {
    Self { api }
  }
}

impl ContactTransport for InProcessTransport {
  async fn send(&self, fields: &FormFields) -> Result<ContactReply, TransportError> {
    let body = serde_json::to_vec(fields)
      .map_err(|e| TransportError::Request(e.to_string()))?;
    let req = Request::builder()
      .method(Method::POST)
      .uri("/api/contact")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body))
      .map_err(|e| TransportError::Request(e.to_string()))?;

    let resp = self
      .api
      .clone()
      .oneshot(req)
      .await
      .unwrap_or_else(|never| match never {});

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .map_err(|e| TransportError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
  }
}

/// `POST /contact` (form-urlencoded)
///
/// A body that cannot be read as a form still gets the page back, with the
/// generic failure status and the rejection's status code.
pub async fn submit(
  State(state): State<AppState>,
  fields: Result<Form<FormFields>, FormRejection>,
) -> Result<(StatusCode, Html<String>), Error> {
  let Form(fields) = match fields {
    Ok(fields) => fields,
    Err(rejection) => {
      tracing::debug!(error = %rejection, "contact form body rejected");
      let form = FormState {
        status: Status::Failed(FALLBACK_FAILURE.to_string()),
        ..FormState::default()
      };
      return Ok((rejection.status(), Html(page::render(&form)?)));
    }
  };

  let mut form = FormState::with_fields(fields);
  form.submit(&InProcessTransport::new(state.api.clone())).await;
  tracing::debug!(status = form.status_message(), "contact form posted");
  Ok((StatusCode::OK, Html(page::render(&form)?)))
}
