//! [`SqliteStore`]: the SQLite implementation of [`RsvpStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, TransactionBehavior};

use rsvp_core::{
  record::{NewRsvp, RsvpRecord},
  store::{Admission, RsvpStore},
};

use crate::{
  Result,
  encode::{RECORD_COLUMNS, RawRecord, encode_dt, fold_key},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An RSVP store backed by a single SQLite file.
///
/// Clones share one reference-counted connection.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

/// What happened inside the admission transaction, before ids and
/// timestamps are folded back into domain types.
enum RawAdmission {
  Accepted { id: i64, total: u32 },
  Duplicate,
  OverCapacity { current: u32 },
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a private in-memory store.
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

  /// Sum of guest counts over attending rows.
  #[cfg(test)]
  pub(crate) async fn attending_total(&self) -> Result<u32> {
    let total: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT COALESCE(SUM(guest_count), 0) FROM rsvp_responses
           WHERE is_attending = 1",
          [],
          |row| row.get(0),
        )?)
      })
      .await?;
    Ok(u32::try_from(total).unwrap_or(u32::MAX))
  }
}

// ─── RsvpStore impl ──────────────────────────────────────────────────────────

impl RsvpStore for SqliteStore {
  type Error = crate::Error;

  async fn admit(&self, rsvp: NewRsvp, capacity: u32) -> Result<Admission> {
    let created_at = Utc::now();

    let first_key     = fold_key(&rsvp.first_name);
    let last_key      = fold_key(&rsvp.last_name);
    let email_key     = rsvp.email.as_deref().map(fold_key);
    let first_name    = rsvp.first_name.clone();
    let last_name     = rsvp.last_name.clone();
    let email         = rsvp.email.clone();
    let message       = rsvp.message.clone();
    let is_attending  = rsvp.is_attending;
    let guest_count   = i64::from(rsvp.guest_count);
    let seats         = i64::from(rsvp.seats());
    let timestamp_str = encode_dt(rsvp.submitted_at);
    let created_str   = encode_dt(created_at);

    let outcome = self
      .conn
      .call(move |conn| {
        // IMMEDIATE takes the write lock up front, so the reads below see
        // the same state the insert commits against, even with several
        // processes sharing the file.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let duplicate = tx
          .query_row(
            "SELECT 1 FROM rsvp_responses
             WHERE (first_name_key = ?1 AND last_name_key = ?2)
                OR (?3 IS NOT NULL AND email_key = ?3)
             LIMIT 1",
            rusqlite::params![first_key, last_key, email_key],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if duplicate {
          return Ok(RawAdmission::Duplicate);
        }

        let current: i64 = tx.query_row(
          "SELECT COALESCE(SUM(guest_count), 0) FROM rsvp_responses
           WHERE is_attending = 1",
          [],
          |row| row.get(0),
        )?;
        let current_u32 = u32::try_from(current).unwrap_or(u32::MAX);
        let total = current + seats;
        if is_attending && total > i64::from(capacity) {
          return Ok(RawAdmission::OverCapacity { current: current_u32 });
        }

        let inserted = tx.execute(
          "INSERT INTO rsvp_responses (
             first_name, last_name, email, is_attending, guest_count, message,
             timestamp, created_at, updated_at,
             first_name_key, last_name_key, email_key
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8, ?9, ?10, ?11)",
          rusqlite::params![
            first_name,
            last_name,
            email,
            is_attending,
            guest_count,
            message,
            timestamp_str,
            created_str,
            first_key,
            last_key,
            email_key,
          ],
        );
        match inserted {
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
          {
            return Ok(RawAdmission::Duplicate);
          }
          other => other?,
        };

        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(RawAdmission::Accepted {
          id,
          total: u32::try_from(total).unwrap_or(u32::MAX),
        })
      })
      .await?;

    Ok(match outcome {
      RawAdmission::Duplicate => Admission::Duplicate,
      RawAdmission::OverCapacity { current } => {
        Admission::OverCapacity { current_total: current }
      }
      RawAdmission::Accepted { id, total } => {
        tracing::debug!(id, total, "rsvp row inserted");
        Admission::Accepted {
          record:       RsvpRecord {
            id,
            first_name: rsvp.first_name,
            last_name: rsvp.last_name,
            email: rsvp.email,
            is_attending: rsvp.is_attending,
            guest_count: rsvp.guest_count,
            message: rsvp.message,
            timestamp: rsvp.submitted_at,
            created_at,
            updated_at: created_at,
          },
          total_guests: total,
        }
      }
    })
  }

  async fn list_responses(&self) -> Result<Vec<RsvpRecord>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {RECORD_COLUMNS} FROM rsvp_responses
           ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}
