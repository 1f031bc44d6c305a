//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (microsecond
//! precision, `Z` suffix) so that lexical order equals chronological order.

use chrono::{DateTime, SecondsFormat, Utc};
use rsvp_core::record::RsvpRecord;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Dedup keys ──────────────────────────────────────────────────────────────

/// Case-fold a name or address for the uniqueness columns.
pub fn fold_key(s: &str) -> String { s.to_lowercase() }

// ─── Raw row types ───────────────────────────────────────────────────────────

/// Intermediate representation of an `rsvp_responses` row.
pub struct RawRecord {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        Option<String>,
  pub is_attending: bool,
  pub guest_count:  i64,
  pub message:      Option<String>,
  pub timestamp:    String,
  pub created_at:   String,
  pub updated_at:   String,
}

/// Column list matching [`RawRecord::from_row`].
pub const RECORD_COLUMNS: &str = "id, first_name, last_name, email, is_attending, \
   guest_count, message, timestamp, created_at, updated_at";

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      first_name:   row.get(1)?,
      last_name:    row.get(2)?,
      email:        row.get(3)?,
      is_attending: row.get(4)?,
      guest_count:  row.get(5)?,
      message:      row.get(6)?,
      timestamp:    row.get(7)?,
      created_at:   row.get(8)?,
      updated_at:   row.get(9)?,
    })
  }

  pub fn into_record(self) -> Result<RsvpRecord> {
    let guest_count = u8::try_from(self.guest_count).map_err(|_| {
      Error::OutOfRange {
        column: "guest_count",
        value:  self.guest_count,
      }
    })?;

    Ok(RsvpRecord {
      id: self.id,
      first_name: self.first_name,
      last_name: self.last_name,
      email: self.email,
      is_attending: self.is_attending,
      guest_count,
      message: self.message,
      timestamp: decode_dt(&self.timestamp)?,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
