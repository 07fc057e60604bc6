//! JSON API for the Maple Properties site.
//!
//! Exposes an axum [`Router`] serving the contact-form endpoint, backed by
//! any [`SubmissionSink`]. Transport and static-page concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", maple_api::api_router(ContactState::new(Arc::new(LogSink), delay)))
//! ```

pub mod contact;
pub mod error;
pub mod sink;

use std::{any::Any, sync::Arc, time::Duration};

use axum::{
  Router,
  extract::DefaultBodyLimit,
  response::{IntoResponse, Response},
  routing::any,
};
use maple_core::SubmissionSink;
use tower_http::catch_panic::CatchPanicLayer;

pub use error::ApiError;
pub use sink::LogSink;

// ─── State ────────────────────────────────────────────────────────────────────

/// Shared state for the contact handler. Read-only once built.
pub struct ContactState<K> {
  pub sink:  Arc<K>,
  /// Artificial pause before a success reply.
  pub delay: Duration,
}

impl<K> ContactState<K> {
  pub fn new(sink: Arc<K>, delay: Duration) -> Self {
    Self { sink, delay }
  }
}

impl<K> Clone for ContactState<K> {
  fn clone(&self) -> Self {
    Self { sink: Arc::clone(&self.sink), delay: self.delay }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router. Routes are relative; nest it under `/api`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. A panic inside a handler is answered with the
/// generic fault reply instead of tearing down the connection.
pub fn api_router<K>(state: ContactState<K>) -> Router<()>
where
  K: SubmissionSink + 'static,
{
  Router::new()
    .route("/contact", any(contact::handler::<K>))
    .layer(DefaultBodyLimit::max(contact::MAX_BODY_BYTES))
    .layer(CatchPanicLayer::custom(panic_response))
    .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    s.to_string()
  } else {
    "unknown panic payload".to_string()
  };
  ApiError::Internal(format!("handler panicked: {detail}").into()).into_response()
}
