//! Async HTTP transport for the contact API.

use std::time::Duration;

use anyhow::{Context, Result};
use maple_core::{ContactReply, ContactTransport, FormFields, TransportError};
use reqwest::Client;

/// Posts form fields to `{base_url}/api/contact`.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpTransport {
  client:   Client,
  base_url: String,
}

impl HttpTransport {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }
}

impl ContactTransport for HttpTransport {
  /// `POST /api/contact`
  ///
  /// Any HTTP status with a JSON reply body counts as a reply; only a
  /// failed exchange or an undecodable body is an error.
  async fn send(&self, fields: &FormFields) -> Result<ContactReply, TransportError> {
    let resp = self
      .client
      .post(self.url("/contact"))
      .json(fields)
      .send()
      .await
      .map_err(|e| TransportError::Request(e.to_string()))?;

    tracing::debug!(status = %resp.status(), "contact reply received");

    resp
      .json::<ContactReply>()
      .await
      .map_err(|e| TransportError::Decode(e.to_string()))
  }
}
