//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `contact-store-sqlite`).
//! Higher layers (`ContactService`, `contact-api`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::contact::{Contact, ContactId, NewContact};

/// Abstraction over a relational contact store.
///
/// Absence is reported as `Ok(None)`; `Err` is reserved for backend failures.
/// Every list method returns rows newest first (`created_at` descending, ties
/// broken by `id` descending).
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new contact in a single transaction. The `id` and `created_at`
  /// are assigned by the store.
  fn insert(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Delete a contact in a single transaction. Returns `true` if a row was
  /// removed; deleting an unknown id is not an error.
  fn delete_by_id(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve a contact by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// All contacts whose email equals `email` exactly.
  fn find_by_email(
    &self,
    email: String,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// All contacts.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Contacts with `start <= created_at <= end`.
  fn find_created_between(
    &self,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;
}
