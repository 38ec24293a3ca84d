//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed microsecond width,
//! so lexical order in SQL matches chronological order.

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound as _, Utc};
use contact_core::{Contact, ContactId};

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Round up to the stored precision, so a lower bound never admits a row
/// stamped earlier than `dt`.
pub fn ceil_to_micros(dt: DateTime<Utc>) -> DateTime<Utc> {
  let truncated = dt.trunc_subsecs(6);
  if truncated < dt {
    truncated + Duration::microseconds(1)
  } else {
    truncated
  }
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub id:         ContactId,
  pub name:       String,
  pub email:      String,
  pub message:    String,
  pub subject:    Option<String>,
  pub phone:      Option<String>,
  pub created_at: String,
}

impl RawContact {
  /// Map a row selected with [`COLUMNS`](crate::schema::COLUMNS).
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawContact {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      message:    row.get(3)?,
      subject:    row.get(4)?,
      phone:      row.get(5)?,
      created_at: row.get(6)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         self.id,
      name:       self.name,
      email:      self.email,
      message:    self.message,
      subject:    self.subject,
      phone:      self.phone,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn encoded_timestamps_sort_lexically() {
    let a = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let b = a + Duration::microseconds(1);
    let c = a + Duration::milliseconds(900);
    let (ea, eb, ec) = (encode_dt(a), encode_dt(b), encode_dt(c));
    assert_eq!(ea.len(), eb.len());
    assert_eq!(eb.len(), ec.len());
    assert!(ea < eb && eb < ec);
  }

  #[test]
  fn timestamp_round_trips() {
    let a = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
      + Duration::microseconds(123_456);
    assert_eq!(decode_dt(&encode_dt(a)).unwrap(), a);
  }

  #[test]
  fn ceil_to_micros_rounds_only_partial_micros() {
    let a = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    assert_eq!(ceil_to_micros(a), a);
    assert_eq!(
      ceil_to_micros(a + Duration::nanoseconds(500)),
      a + Duration::microseconds(1)
    );
    assert_eq!(
      ceil_to_micros(a + Duration::microseconds(3)),
      a + Duration::microseconds(3)
    );
  }

  #[test]
  fn bad_timestamp_is_a_parse_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
