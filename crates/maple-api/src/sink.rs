//! The production submission sink: one structured log event per submission.

use std::convert::Infallible;

use maple_core::{ContactSubmission, SubmissionSink};

/// Log target for accepted submissions, so they can be filtered or routed
/// separately (`RUST_LOG=maple::contact=info`).
pub const TARGET: &str = "maple::contact";

/// Records each accepted submission as a single `INFO` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
  type Error = Infallible;

  async fn record(&self, s: &ContactSubmission) -> Result<(), Infallible> {
    tracing::info!(
      target: TARGET,
      id = %s.id,
      name = %s.name,
      email = %s.email,
      phone = ?s.phone,
      address = ?s.address,
      contact_message = %s.message,
      timestamp = %s.timestamp_rfc3339(),
      "contact form submission",
    );
    Ok(())
  }
}
