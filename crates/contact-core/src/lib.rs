//! Domain types, the storage trait, and the service layer for the
//! contact-form backend.
//!
//! No HTTP or database code lives here; `contact-store-sqlite` and
//! `contact-api` plug into [`ContactStore`] and [`ContactService`].

pub mod contact;
pub mod error;
pub mod service;
pub mod store;

pub use contact::{Contact, ContactId, NewContact, ValidationError};
pub use error::{Error, Result};
pub use service::ContactService;
pub use store::ContactStore;
