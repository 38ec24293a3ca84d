//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;

use contact_core::{Contact, ContactId, NewContact, store::ContactStore};

use crate::{
  Error, Result,
  encode::{RawContact, ceil_to_micros, decode_dt, encode_dt},
  schema::{COLUMNS, ORDER_NEWEST_FIRST, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `SELECT <COLUMNS> FROM contacts [WHERE ...] ORDER BY ...` and decode
  /// every row.
  async fn select(
    &self,
    filter: &'static str,
    params: Vec<String>,
  ) -> Result<Vec<Contact>> {
    let sql = format!("SELECT {COLUMNS} FROM contacts {filter} {ORDER_NEWEST_FIRST}");

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert(&self, input: NewContact) -> Result<Contact> {
    let name    = input.name().to_owned();
    let email   = input.email().to_owned();
    let message = input.message().to_owned();
    let subject = input.subject().map(str::to_owned);
    let phone   = input.phone().map(str::to_owned);

    let (id, at_str): (ContactId, String) = self
      .conn
      .call(move |conn| {
        // Stamped on the connection thread so timestamps follow commit order.
        let at_str = encode_dt(Utc::now());
        // Dropping `tx` without `commit` rolls back.
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO contacts (name, email, message, subject, phone, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![name, email, message, subject, phone, at_str],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok((id, at_str))
      })
      .await?;

    // Decoding the stored text keeps the returned record equal to a re-read.
    Ok(input.into_contact(id, decode_dt(&at_str)?))
  }

  async fn delete_by_id(&self, id: ContactId) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let n = tx.execute(
          "DELETE FROM contacts WHERE id = ?1",
          rusqlite::params![id],
        )?;
        tx.commit()?;
        Ok(n > 0)
      })
      .await?;
    Ok(removed)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id],
            RawContact::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn find_by_email(&self, email: String) -> Result<Vec<Contact>> {
    self.select("WHERE email = ?1", vec![email]).await
  }

  async fn find_all(&self) -> Result<Vec<Contact>> {
    self.select("", vec![]).await
  }

  async fn find_created_between(
    &self,
    start: DateTime<Utc>,
    end:   DateTime<Utc>,
  ) -> Result<Vec<Contact>> {
    self
      .select(
        "WHERE created_at >= ?1 AND created_at <= ?2",
        vec![encode_dt(ceil_to_micros(start)), encode_dt(end)],
      )
      .await
  }
}
