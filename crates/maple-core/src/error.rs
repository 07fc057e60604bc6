//! Error types for `maple-core`.

use thiserror::Error;

/// Why a contact form was turned away before anything was recorded.
///
/// The `Display` text is the exact message returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
  #[error("Name, email, and message are required")]
  MissingRequired,

  #[error("Please provide a valid email address")]
  InvalidEmail,
}

/// A submission attempt that never produced a usable reply.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("request failed: {0}")]
  Request(String),

  #[error("could not decode reply: {0}")]
  Decode(String),
}
