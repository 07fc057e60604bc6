//! The Maple Properties website.
//!
//! Exposes an axum [`Router`] serving the landing page, the no-script
//! contact form, the JSON contact API and static assets.

pub mod error;
pub mod form;
pub mod page;
pub mod settings;

pub use settings::SiteConfig;
pub use error::Error;

use std::sync::Arc;

use axum::{
  Router,
  http::header,
  response::{Html, IntoResponse},
  routing::{get, post},
};
use maple_api::{ContactState, api_router};
use maple_core::{FormState, SubmissionSink};
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through the page handlers.
#[derive(Clone)]
pub struct AppState {
  /// The API router, nested at `/api`, for in-process form delivery.
  pub api: Router,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full site router, recording submissions through `sink`.
pub fn router<K>(config: &SiteConfig, sink: Arc<K>) -> Router
where
  K: SubmissionSink + 'static,
{
  let api = Router::new().nest(
    "/api",
    api_router(ContactState::new(sink, config.response_delay())),
  );
  let assets = ServeDir::new(&config.public_dir);
  let state = AppState { api: api.clone() };

  Router::new()
    .route("/", get(index))
    .route("/contact", post(form::submit))
    .route(page::STYLESHEET, get(stylesheet))
    .route("/healthz", get(healthz))
    .with_state(state)
    .merge(api)
    .fallback_service(assets)
    .layer(TraceLayer::new_for_http())
}

// ─── Route handlers ──────────────────────────────────────────────────────────

async fn index() -> Result<Html<String>, Error> {
  Ok(Html(page::render(&FormState::new())?))
}

async fn stylesheet() -> impl IntoResponse {
  (
    [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
    include_str!("../assets/site.css"),
  )
}

async fn healthz() -> &'static str {
  "ok"
}

#[cfg(test)]
mod tests;
