//! Whole-site router tests.

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use maple_core::{MemorySink, reply::THANK_YOU};
use tower::ServiceExt as _;

use crate::{SiteConfig, router};

fn site(sink: Arc<MemorySink>) -> Router {
  let config = SiteConfig {
    public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
    response_delay_ms: 0,
    ..SiteConfig::default()
  };
  router(&config, sink)
}

async fn send(
  router: Router,
  method: &str,
  uri: &str,
  content_type: Option<&str>,
  body: &str,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  if let Some(ct) = content_type {
    builder = builder.header(header::CONTENT_TYPE, ct);
  }
  let req = builder.body(Body::from(body.to_string())).unwrap();
  router.oneshot(req).await.unwrap()
}

async fn text(resp: Response) -> String {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  String::from_utf8(bytes.to_vec()).unwrap()
}

const FORM: Option<&str> = Some("application/x-www-form-urlencoded");

// ── Pages ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn index_renders_landing_page() {
  let resp = send(site(Arc::default()), "GET", "/", None, "").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
  assert!(ct.starts_with("text/html"), "Content-Type: {ct}");
  let html = text(resp).await;
  assert!(html.contains("id=\"contact\""));
  assert!(html.contains("action=\"/contact#contact\""));
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
  let resp = send(site(Arc::default()), "GET", "/site.css", None, "").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
  assert!(ct.starts_with("text/css"), "Content-Type: {ct}");
}

#[tokio::test]
async fn healthz_returns_ok() {
  let resp = send(site(Arc::default()), "GET", "/healthz", None, "").await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(text(resp).await, "ok");
}

// ── Static assets ────────────────────────────────────────────────────────────

#[tokio::test]
async fn public_files_are_served_as_is() {
  let resp = send(site(Arc::default()), "GET", "/assets/site.css", None, "").await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(text(resp).await.contains("--accent"));
}

#[tokio::test]
async fn missing_public_file_returns_404() {
  let resp = send(site(Arc::default()), "GET", "/maple-missing.png", None, "").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── JSON API ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn api_is_mounted_under_api() {
  let sink = Arc::new(MemorySink::new());
  let resp = send(
    site(sink.clone()),
    "POST",
    "/api/contact",
    Some("application/json"),
    r#"{"name":"Jo","email":"jo@example.com","message":"Hi"}"#,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(sink.len(), 1);

  let resp = send(site(sink.clone()), "GET", "/api/contact", None, "").await;
  assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
  assert_eq!(sink.len(), 1);
}

// ── No-script form ───────────────────────────────────────────────────────────

#[tokio::test]
async fn posted_form_shows_thanks_and_clears_fields() {
  let sink = Arc::new(MemorySink::new());
  let resp = send(
    site(sink.clone()),
    "POST",
    "/contact",
    FORM,
    "name=Jo&email=jo%40example.com&phone=&address=1+Elm+St&message=Hi",
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  let html = text(resp).await;
  assert!(html.contains(THANK_YOU), "thank-you message missing");
  assert!(html.contains("class=\"status success\""));
  assert!(!html.contains("value=\"Jo\""), "name field was not cleared");

  let records = sink.records();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].address.as_deref(), Some("1 Elm St"));
}

#[tokio::test]
async fn posted_form_with_bad_email_keeps_fields() {
  let sink = Arc::new(MemorySink::new());
  let resp = send(
    site(sink.clone()),
    "POST",
    "/contact",
    FORM,
    "name=Jo&email=not-an-email&message=Hi",
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  let html = text(resp).await;
  assert!(html.contains("Please provide a valid email address"));
  assert!(html.contains("class=\"status error\""));
  assert!(html.contains("value=\"Jo\""));
  assert!(html.contains("value=\"not-an-email\""));
  assert!(sink.is_empty());
}

#[tokio::test]
async fn posted_form_missing_fields_reports_required() {
  let sink = Arc::new(MemorySink::new());
  let resp = send(site(sink.clone()), "POST", "/contact", FORM, "name=Jo").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let html = text(resp).await;
  assert!(html.contains("Name, email, and message are required"));
  assert!(sink.is_empty());
}

#[tokio::test]
async fn unreadable_form_body_still_renders_page() {
  let sink = Arc::new(MemorySink::new());
  let resp = send(
    site(sink.clone()),
    "POST",
    "/contact",
    Some("text/plain"),
    "name=Jo&email=jo%40example.com&message=Hi",
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
  let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
  assert!(ct.starts_with("text/html"), "Content-Type: {ct}");

  let html = text(resp).await;
  assert!(html.contains("class=\"status error\""));
  assert!(html.contains("Something went wrong. Please try again."));
  assert!(sink.is_empty());
}
