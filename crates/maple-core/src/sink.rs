//! The `SubmissionSink` trait: where accepted submissions are recorded.
//!
//! The production sink writes a structured log event (see `maple-api`).
//! Recording is the only side effect of an accepted submission; a database
//! or mail-delivery backend would be another implementation of this trait.

use std::{
  convert::Infallible,
  future::Future,
  sync::{Mutex, PoisonError},
};

use crate::submission::ContactSubmission;

/// Abstraction over the operational sink for accepted submissions.
///
/// Called exactly once per accepted submission. Methods return `Send`
/// futures so sinks can be shared across axum handlers.
pub trait SubmissionSink: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn record<'a>(
    &'a self,
    submission: &'a ContactSubmission,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

/// Keeps every recorded submission in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
  records: Mutex<Vec<ContactSubmission>>,
}

impl MemorySink {
  pub fn new() -> Self { Self::default() }

  /// A copy of everything recorded so far.
  pub fn records(&self) -> Vec<ContactSubmission> {
    self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  pub fn len(&self) -> usize {
    self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl SubmissionSink for MemorySink {
  type Error = Infallible;

  async fn record(&self, submission: &ContactSubmission) -> Result<(), Infallible> {
    self
      .records
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(submission.clone());
    Ok(())
  }
}
