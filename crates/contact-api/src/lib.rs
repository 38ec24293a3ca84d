//! JSON REST API for contact-form submissions.
//!
//! Exposes an axum [`Router`] backed by a [`ContactService`] over any
//! [`contact_core::store::ContactStore`]. CORS, tracing, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = contact_api::api_router(Arc::new(ContactService::new(store)))
//!   .layer(cors);
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use contact_core::{ContactService, store::ContactStore};

pub use error::ApiError;

/// Build a fully-materialised router serving every `/api/contact` route.
///
/// The returned `Router<()>` can be merged or layered regardless of the
/// caller's own state type.
pub fn api_router<S>(service: Arc<ContactService<S>>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/api/contact",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route("/api/contact/health", get(contacts::health))
    .route("/api/contact/email/{email}", get(contacts::by_email::<S>))
    .route(
      "/api/contact/{id}",
      get(contacts::get_one::<S>).delete(contacts::delete_one::<S>),
    )
    .with_state(service)
}
