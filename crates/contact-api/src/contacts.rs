//! Handlers for `/api/contact` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/api/contact` | Body: [`NewContactBody`]; 201 + `{success, message, contactId}` |
//! | `GET`    | `/api/contact` | Optional `?from=&to=` (RFC 3339, both or neither) |
//! | `GET`    | `/api/contact/{id}` | 404 if not found |
//! | `GET`    | `/api/contact/email/{email}` | Possibly empty list |
//! | `DELETE` | `/api/contact/{id}` | Idempotent |
//! | `GET`    | `/api/contact/health` | Liveness only; does not touch the store |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use contact_core::{
  Contact, ContactId, ContactService, Error, NewContact, ValidationError,
  store::ContactStore,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /api/contact`.
///
/// Missing required fields deserialise as empty strings and are then rejected
/// by validation, so clients get one error shape for both cases.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewContactBody {
  pub name:    String,
  pub email:   String,
  pub message: String,
  pub subject: Option<String>,
  pub phone:   Option<String>,
}

impl TryFrom<NewContactBody> for NewContact {
  type Error = ValidationError;

  fn try_from(b: NewContactBody) -> Result<Self, Self::Error> {
    Ok(
      NewContact::new(b.name, b.email, b.message)?
        .with_subject(b.subject)
        .with_phone(b.phone),
    )
  }
}

/// `POST /api/contact` — returns 201 + `{success, message, contactId}`.
pub async fn create<S>(
  State(service): State<Arc<ContactService<S>>>,
  body: Result<Json<NewContactBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore + 'static,
{
  let Json(body) = body.map_err(|e| {
    warn!(error = %e, "rejected unreadable contact body");
    ApiError::Invalid(e.body_text())
  })?;

  let input = NewContact::try_from(body).map_err(|e| {
    warn!(error = %e, "rejected contact submission");
    ApiError::Invalid(e.to_string())
  })?;

  let contact = service.save_contact(input).await.map_err(|e| {
    error!(error = %e, "error creating contact");
    ApiError::SaveFailed(e.to_string())
  })?;

  info!(id = contact.id, "contact created");
  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success":   true,
      "message":   "Contact message received successfully!",
      "contactId": contact.id,
    })),
  ))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Inclusive lower bound on `createdAt`.
  pub from: Option<DateTime<Utc>>,
  /// Inclusive upper bound on `createdAt`.
  pub to:   Option<DateTime<Utc>>,
}

/// `GET /api/contact[?from=...&to=...]`
pub async fn list<S>(
  State(service): State<Arc<ContactService<S>>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore + 'static,
{
  let Query(params) = params.map_err(|e| {
    warn!(error = %e, "rejected list query");
    ApiError::BadRequest
  })?;

  let contacts = match (params.from, params.to) {
    (None, None) => service.list_all().await,
    (Some(from), Some(to)) => service.list_created_between(from, to).await,
    _ => {
      warn!("list window needs both `from` and `to`");
      return Err(ApiError::BadRequest);
    }
  }
  .map_err(|e| {
    error!(error = %e, "error fetching contacts");
    ApiError::Internal
  })?;

  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /api/contact/{id}` — 404 only when the id is unknown; a store failure
/// is a 500.
pub async fn get_one<S>(
  State(service): State<Arc<ContactService<S>>>,
  Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore + 'static,
{
  match service.get_by_id(id).await {
    Ok(contact) => Ok(Json(contact)),
    Err(Error::NotFound(_)) => {
      info!(id, "contact not found");
      Err(ApiError::NotFound)
    }
    Err(e) => {
      error!(id, error = %e, "error fetching contact");
      Err(ApiError::Internal)
    }
  }
}

// ─── By email ─────────────────────────────────────────────────────────────────

/// `GET /api/contact/email/{email}`
pub async fn by_email<S>(
  State(service): State<Arc<ContactService<S>>>,
  Path(email): Path<String>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore + 'static,
{
  let contacts = service.list_by_email(&email).await.map_err(|e| {
    error!(email = %email, error = %e, "error fetching contacts for email");
    ApiError::Internal
  })?;
  Ok(Json(contacts))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /api/contact/{id}`
pub async fn delete_one<S>(
  State(service): State<Arc<ContactService<S>>>,
  Path(id): Path<ContactId>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore + 'static,
{
  service.delete_contact(id).await.map_err(|e| {
    error!(id, error = %e, "error deleting contact");
    ApiError::DeleteFailed
  })?;

  Ok(Json(json!({
    "success": true,
    "message": "Contact deleted successfully",
  })))
}

// ─── Health ───────────────────────────────────────────────────────────────────

/// `GET /api/contact/health`
pub async fn health() -> Json<Value> {
  Json(json!({
    "status":  "UP",
    "message": "Portfolio API is running",
  }))
}
