//! Core types for the Maple Properties contact flow.
//!
//! This crate is deliberately free of HTTP dependencies. The API handler,
//! the site and the terminal client all depend on it.

pub mod email;
pub mod error;
pub mod form;
pub mod reply;
pub mod sink;
pub mod submission;

pub use error::{Rejection, TransportError};
pub use form::{ContactTransport, FieldName, FormFields, FormState, Status};
pub use reply::ContactReply;
pub use sink::{MemorySink, SubmissionSink};
pub use submission::{ContactForm, ContactSubmission, ValidForm, validate};
