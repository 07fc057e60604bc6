//! Email address shape check.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`: no whitespace or second `@` anywhere, and at least one
/// `.` after the `@` with something on both sides of it.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Returns `true` if `email` looks like a deliverable address.
///
/// This is a shape check only; no DNS or mailbox verification happens.
pub fn is_valid_email(email: &str) -> bool {
  EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_ordinary_addresses() {
    assert!(is_valid_email("jo@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    assert!(is_valid_email("a@b.c"));
  }

  #[test]
  fn rejects_missing_parts() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("jo@"));
    assert!(!is_valid_email("jo@example"));
    assert!(!is_valid_email("jo@example."));
    assert!(!is_valid_email("jo@.com"));
    assert!(!is_valid_email(""));
  }

  #[test]
  fn rejects_whitespace_and_extra_at() {
    assert!(!is_valid_email("jo @example.com"));
    assert!(!is_valid_email("jo@ example.com"));
    assert!(!is_valid_email(" jo@example.com"));
    assert!(!is_valid_email("jo@example.com\n"));
    assert!(!is_valid_email("jo@ex@ample.com"));
  }
}
