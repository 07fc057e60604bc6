//! Contact form interaction state.
//!
//! [`FormState`] is owned by whichever front end presents the form (the
//! server-rendered page, the terminal client). It holds the field values, a
//! submitting flag and the status line, and knows how to turn a handler
//! reply into the next state. How the fields reach the handler is left to a
//! [`ContactTransport`].

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{error::TransportError, reply::ContactReply};

pub const FALLBACK_FAILURE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

// ─── Fields ──────────────────────────────────────────────────────────────────

/// The values currently typed into the form. All start out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub address: String,
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
  Name,
  Email,
  Phone,
  Address,
  Message,
}

impl FieldName {
  pub const ALL: [FieldName; 5] = [
    FieldName::Name,
    FieldName::Email,
    FieldName::Phone,
    FieldName::Address,
    FieldName::Message,
  ];

  /// The wire / HTML `name` attribute.
  pub fn as_str(self) -> &'static str {
    match self {
      FieldName::Name => "name",
      FieldName::Email => "email",
      FieldName::Phone => "phone",
      FieldName::Address => "address",
      FieldName::Message => "message",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      FieldName::Name => "Name",
      FieldName::Email => "Email",
      FieldName::Phone => "Phone",
      FieldName::Address => "Property Address",
      FieldName::Message => "Message",
    }
  }
}

impl FormFields {
  pub fn get(&self, field: FieldName) -> &str {
    match field {
      FieldName::Name => &self.name,
      FieldName::Email => &self.email,
      FieldName::Phone => &self.phone,
      FieldName::Address => &self.address,
      FieldName::Message => &self.message,
    }
  }

  pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
    let slot = match field {
      FieldName::Name => &mut self.name,
      FieldName::Email => &mut self.email,
      FieldName::Phone => &mut self.phone,
      FieldName::Address => &mut self.address,
      FieldName::Message => &mut self.message,
    };
    *slot = value.into();
  }
}

// ─── Transport ───────────────────────────────────────────────────────────────

/// Delivers the current field values to the submission handler.
///
/// `Err` means no usable reply arrived at all (connection failure, timeout,
/// a body that is not a [`ContactReply`]). An error *reply* from the handler
/// is still `Ok`.
pub trait ContactTransport: Send + Sync {
  fn send<'a>(
    &'a self,
    fields: &'a FormFields,
  ) -> impl Future<Output = Result<ContactReply, TransportError>> + Send + 'a;
}

// ─── State ───────────────────────────────────────────────────────────────────

/// The status line shown above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
  #[default]
  Idle,
  Sent(String),
  Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
  pub fields:     FormFields,
  pub submitting: bool,
  pub status:     Status,
}

impl FormState {
  pub fn new() -> Self { Self::default() }

  pub fn with_fields(fields: FormFields) -> Self {
    Self { fields, ..Self::default() }
  }

  pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
    self.fields.set(field, value);
  }

  /// The status text; empty while idle.
  pub fn status_message(&self) -> &str {
    match &self.status {
      Status::Idle => "",
      Status::Sent(m) | Status::Failed(m) => m,
    }
  }

  /// Send the current fields and fold the outcome into the state.
  ///
  /// `submitting` is set for the duration of the send and is always cleared
  /// afterwards, whatever the outcome.
  pub async fn submit<T: ContactTransport>(&mut self, transport: &T) {
    self.submitting = true;
    self.status = Status::Idle;

    let outcome = transport.send(&self.fields).await;
    self.apply(outcome);

    self.submitting = false;
  }

  /// Update the status (and, on success, the fields) from one attempt.
  pub fn apply(&mut self, outcome: Result<ContactReply, TransportError>) {
    self.status = match outcome {
      Ok(reply) if reply.is_success() => {
        self.fields = FormFields::default();
        Status::Sent(reply.message)
      }
      Ok(reply) if reply.message.is_empty() => {
        Status::Failed(FALLBACK_FAILURE.to_string())
      }
      Ok(reply) => Status::Failed(reply.message),
      Err(_) => Status::Failed(NETWORK_ERROR.to_string()),
    };
  }
}
