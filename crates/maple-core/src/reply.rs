//! The JSON body returned by `POST /api/contact`.

use serde::{Deserialize, Serialize};

pub const THANK_YOU: &str =
  "Thank you for your message! We will get back to you soon.";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const BODY_TOO_LARGE: &str = "Request body too large";
pub const SOMETHING_WENT_WRONG: &str =
  "Something went wrong. Please try again later.";

/// `{ "message": ..., "success"?: ... }`
///
/// `success` is only present on the success and internal-fault replies;
/// client errors carry a message alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
  #[serde(default)]
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub success: Option<bool>,
}

impl ContactReply {
  /// A reply with a message and no `success` flag.
  pub fn plain(message: impl Into<String>) -> Self {
    Self { message: message.into(), success: None }
  }

  pub fn accepted() -> Self {
    Self { message: THANK_YOU.to_string(), success: Some(true) }
  }

  pub fn fault() -> Self {
    Self { message: SOMETHING_WENT_WRONG.to_string(), success: Some(false) }
  }

  /// Only an explicit `success: true` counts.
  pub fn is_success(&self) -> bool {
    self.success == Some(true)
  }
}
