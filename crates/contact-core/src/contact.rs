//! The `Contact` record and its validated input form.
//!
//! A [`NewContact`] can only be built through [`NewContact::new`], so every
//! value that reaches a store has already passed boundary validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-generated surrogate key.
pub type ContactId = i64;

/// A persisted contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:         ContactId,
  pub name:       String,
  pub email:      String,
  pub message:    String,
  pub subject:    Option<String>,
  pub phone:      Option<String>,
  /// Set once by the store on insert; the ordering key for every list view.
  pub created_at: DateTime<Utc>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Why a submission was rejected before reaching the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{0} must not be blank")]
  Blank(&'static str),

  #[error("invalid email address: {0:?}")]
  InvalidEmail(String),
}

/// Accepts `local@domain` with exactly one `@`, no whitespace, and a domain
/// made of non-empty dot-separated labels.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
  let invalid = || ValidationError::InvalidEmail(email.to_owned());

  if email.chars().any(char::is_whitespace) {
    return Err(invalid());
  }
  let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
  if local.is_empty() || domain.is_empty() || domain.contains('@') {
    return Err(invalid());
  }
  if domain.split('.').any(str::is_empty) {
    return Err(invalid());
  }
  Ok(())
}

fn require(field: &'static str, value: String) -> Result<String, ValidationError> {
  if value.trim().is_empty() {
    Err(ValidationError::Blank(field))
  } else {
    Ok(value)
  }
}

fn optional(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

// ─── NewContact ──────────────────────────────────────────────────────────────

/// A validated submission that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  name:    String,
  email:   String,
  message: String,
  subject: Option<String>,
  phone:   Option<String>,
}

impl NewContact {
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    message: impl Into<String>,
  ) -> Result<Self, ValidationError> {
    let name = require("name", name.into())?;
    let email = require("email", email.into())?;
    let message = require("message", message.into())?;
    validate_email(&email)?;

    Ok(Self {
      name,
      email,
      message,
      subject: None,
      phone: None,
    })
  }

  /// Attach an optional subject line. Blank values are dropped.
  pub fn with_subject(mut self, subject: Option<String>) -> Self {
    self.subject = optional(subject);
    self
  }

  /// Attach an optional phone number. Blank values are dropped.
  pub fn with_phone(mut self, phone: Option<String>) -> Self {
    self.phone = optional(phone);
    self
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn email(&self) -> &str { &self.email }

  pub fn message(&self) -> &str { &self.message }

  pub fn subject(&self) -> Option<&str> { self.subject.as_deref() }

  pub fn phone(&self) -> Option<&str> { self.phone.as_deref() }

  /// Combine with the store-assigned id and timestamp.
  pub fn into_contact(self, id: ContactId, created_at: DateTime<Utc>) -> Contact {
    Contact {
      id,
      name: self.name,
      email: self.email,
      message: self.message,
      subject: self.subject,
      phone: self.phone,
      created_at,
    }
  }
}
