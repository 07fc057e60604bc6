//! Contact-form payloads, validation, and the accepted submission record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{email::is_valid_email, error::Rejection};

// ─── Raw payload ─────────────────────────────────────────────────────────────

/// The request body as received. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub phone:   Option<String>,
  pub address: Option<String>,
  pub message: Option<String>,
}

impl ContactForm {
  /// Decode a request body without ever failing.
  ///
  /// An empty body, invalid JSON, or a JSON value that is not an object all
  /// yield a form with no fields. See [`ContactForm::from_value`] for how
  /// individual values are read.
  pub fn from_json_bytes(body: &[u8]) -> Self {
    let value = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
    Self::from_value(&value)
  }

  /// Read the five fields out of a JSON object.
  ///
  /// Strings are taken as-is. Numbers and booleans are read as their text
  /// form (`42` becomes `"42"`), except `0` and `false`, which count as
  /// absent along with `null`. Objects and arrays count as absent.
  pub fn from_value(value: &Value) -> Self {
    let field = |key: &str| value.get(key).and_then(field_text);
    Self {
      name:    field("name"),
      email:   field("email"),
      phone:   field("phone"),
      address: field("address"),
      message: field("message"),
    }
  }
}

fn field_text(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Bool(true) => Some("true".to_string()),
    Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
    _ => None,
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// A form that passed [`validate`]. Required fields are guaranteed non-empty
/// and `email` is well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidForm {
  pub name:    String,
  pub email:   String,
  pub phone:   Option<String>,
  pub address: Option<String>,
  pub message: String,
}

/// Check the required fields first, then the email shape.
///
/// `phone` and `address` are passed through untouched.
pub fn validate(form: ContactForm) -> Result<ValidForm, Rejection> {
  let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());

  let (Some(name), Some(email), Some(message)) = (
    non_empty(form.name),
    non_empty(form.email),
    non_empty(form.message),
  ) else {
    return Err(Rejection::MissingRequired);
  };

  if !is_valid_email(&email) {
    return Err(Rejection::InvalidEmail);
  }

  Ok(ValidForm {
    name,
    email,
    phone: form.phone,
    address: form.address,
    message,
  })
}

// ─── Accepted record ─────────────────────────────────────────────────────────

/// An accepted submission: the validated fields plus handling-time metadata.
///
/// Lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
  pub id:        Uuid,
  pub name:      String,
  pub email:     String,
  pub phone:     Option<String>,
  pub address:   Option<String>,
  pub message:   String,
  pub timestamp: DateTime<Utc>,
}

impl ContactSubmission {
  /// Stamp `form` with a fresh id and the current time.
  pub fn accept(form: ValidForm) -> Self {
    Self::new(form, Uuid::new_v4(), Utc::now())
  }

  pub fn new(form: ValidForm, id: Uuid, timestamp: DateTime<Utc>) -> Self {
    Self {
      id,
      name: form.name,
      email: form.email,
      phone: form.phone,
      address: form.address,
      message: form.message,
      timestamp,
    }
  }

  /// `timestamp` as RFC 3339 with millisecond precision, e.g.
  /// `2024-05-01T09:30:00.000Z`.
  pub fn timestamp_rfc3339(&self) -> String {
    self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
  }
}
