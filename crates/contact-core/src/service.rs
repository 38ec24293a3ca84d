//! `ContactService`, the one orchestration layer the HTTP API talks to.
//!
//! Every call is one round trip to the injected store. Mutating calls rely on
//! the store's per-call transaction; reads use its default consistency.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
  Error, Result,
  contact::{Contact, ContactId, NewContact},
  store::ContactStore,
};

pub struct ContactService<S> {
  store: S,
}

impl<S: ContactStore> ContactService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  pub async fn save_contact(&self, input: NewContact) -> Result<Contact> {
    info!(name = input.name(), email = input.email(), "saving contact");
    self.store.insert(input).await.map_err(Error::store)
  }

  pub async fn list_all(&self) -> Result<Vec<Contact>> {
    info!("fetching all contacts");
    self.store.find_all().await.map_err(Error::store)
  }

  /// Fails with [`Error::NotFound`] when no contact has this id.
  pub async fn get_by_id(&self, id: ContactId) -> Result<Contact> {
    info!(id, "fetching contact");
    self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))
  }

  pub async fn list_by_email(&self, email: &str) -> Result<Vec<Contact>> {
    info!(email, "fetching contacts for email");
    self
      .store
      .find_by_email(email.to_owned())
      .await
      .map_err(Error::store)
  }

  pub async fn list_created_between(
    &self,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> Result<Vec<Contact>> {
    info!(%start, %end, "fetching contacts in window");
    self
      .store
      .find_created_between(start, end)
      .await
      .map_err(Error::store)
  }

  /// Idempotent: deleting an unknown id succeeds.
  pub async fn delete_contact(&self, id: ContactId) -> Result<()> {
    info!(id, "deleting contact");
    let removed = self.store.delete_by_id(id).await.map_err(Error::store)?;
    if !removed {
      info!(id, "no contact to delete");
    }
    Ok(())
  }
}
