//! SQL schema for the contact SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` is recorded but
//! nothing migrates on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids of deleted rows from being handed out again.
CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    message     TEXT NOT NULL,
    subject     TEXT,
    phone       TEXT,
    created_at  TEXT NOT NULL    -- RFC 3339 UTC, fixed microsecond width
);

CREATE INDEX IF NOT EXISTS contacts_email_idx   ON contacts(email);
CREATE INDEX IF NOT EXISTS contacts_created_idx ON contacts(created_at);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT`, in [`RawContact`](crate::encode::RawContact) order.
pub const COLUMNS: &str =
  "id, name, email, message, subject, phone, created_at";

/// Newest first; `id` breaks ties between rows stamped in the same microsecond.
pub const ORDER_NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";
