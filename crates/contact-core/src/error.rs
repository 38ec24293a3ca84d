//! Error types for `contact-core`.
//!
//! Validation failures never reach the service; they are
//! [`ValidationError`](crate::ValidationError)s raised while building a
//! [`NewContact`](crate::NewContact).

use thiserror::Error;

use crate::contact::ContactId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact not found with id: {0}")]
  NotFound(ContactId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
