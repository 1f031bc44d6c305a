//! Submission intake and statistics, expressed against any [`RsvpStore`].

use chrono::Utc;
use thiserror::Error;

use crate::{
  Rejection,
  locale::Locale,
  record::{NewRsvp, RsvpRecord},
  stats::RsvpStats,
  store::{Admission, RsvpStore},
  submission::RawSubmission,
};

/// Default cap on attending guests.
pub const DEFAULT_CAPACITY: u32 = 100;

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
  pub record:       RsvpRecord,
  /// Attending total after this submission.
  pub total_guests: u32,
  /// Language the guest asked for; used for the confirmation mail.
  pub locale:       Locale,
}

#[derive(Debug, Error)]
pub enum SubmitError<E: std::error::Error + 'static> {
  #[error("{0}")]
  Rejected(Rejection),

  #[error("store error: {0}")]
  Store(#[source] E),
}

/// Validate `raw`, then ask the store to admit it under `capacity`.
///
/// Content rules are checked before the store is touched; duplicate and
/// capacity checks happen inside the store's own transaction. A rejection
/// never writes anything.
pub async fn submit<S: RsvpStore>(
  store: &S,
  raw: RawSubmission,
  capacity: u32,
) -> Result<Receipt, SubmitError<S::Error>> {
  let submission = raw.validate().map_err(SubmitError::Rejected)?;
  let rsvp = NewRsvp::from_submission(&submission, Utc::now());

  match store.admit(rsvp, capacity).await.map_err(SubmitError::Store)? {
    Admission::Accepted { record, total_guests } => Ok(Receipt {
      record,
      total_guests,
      locale: submission.locale,
    }),
    Admission::Duplicate => {
      Err(SubmitError::Rejected(Rejection::DuplicateSubmission))
    }
    Admission::OverCapacity { .. } => {
      Err(SubmitError::Rejected(Rejection::CapacityExceeded { capacity }))
    }
  }
}

/// Read every record and tally it.
pub async fn stats<S: RsvpStore>(store: &S) -> Result<RsvpStats, S::Error> {
  let records = store.list_responses().await?;
  Ok(RsvpStats::from_records(&records))
}

#[cfg(test)]
mod tests {
  use std::{convert::Infallible, sync::Mutex};

  use serde_json::json;

  use super::*;

  /// Single-process stand-in; the mutex gives the atomicity real backends get
  /// from their transactions.
  #[derive(Default)]
  struct MemoryStore {
    rows: Mutex<Vec<RsvpRecord>>,
  }

  impl RsvpStore for MemoryStore {
    type Error = Infallible;

    async fn admit(
      &self,
      rsvp: NewRsvp,
      capacity: u32,
    ) -> Result<Admission, Infallible> {
      let mut rows = self.rows.lock().unwrap();
      let duplicate = rows.iter().any(|r| {
        (r.first_name.to_lowercase() == rsvp.first_name.to_lowercase()
          && r.last_name.to_lowercase() == rsvp.last_name.to_lowercase())
          || matches!(
            (&r.email, &rsvp.email),
            (Some(a), Some(b)) if a.to_lowercase() == b.to_lowercase()
          )
      });
      if duplicate {
        return Ok(Admission::Duplicate);
      }
      let current: u32 = rows.iter().map(RsvpRecord::seats).sum();
      let total_guests = current + rsvp.seats();
      if rsvp.is_attending && total_guests > capacity {
        return Ok(Admission::OverCapacity { current_total: current });
      }
      let record = RsvpRecord {
        id:           rows.len() as i64 + 1,
        first_name:   rsvp.first_name,
        last_name:    rsvp.last_name,
        email:        rsvp.email,
        is_attending: rsvp.is_attending,
        guest_count:  rsvp.guest_count,
        message:      rsvp.message,
        timestamp:    rsvp.submitted_at,
        created_at:   rsvp.submitted_at,
        updated_at:   rsvp.submitted_at,
      };
      rows.push(record.clone());
      Ok(Admission::Accepted { record, total_guests })
    }

    async fn list_responses(&self) -> Result<Vec<RsvpRecord>, Infallible> {
      let mut rows = self.rows.lock().unwrap().clone();
      rows.reverse();
      Ok(rows)
    }
  }

  fn body(first: &str, last: &str, attending: bool, guests: u32) -> RawSubmission {
    serde_json::from_value(json!({
      "firstName": first,
      "lastName": last,
      "isAttending": attending,
      "guestCount": guests,
    }))
    .unwrap()
  }

  #[tokio::test]
  async fn accepted_submission_reports_running_total() {
    let store = MemoryStore::default();
    let receipt = submit(&store, body("Anna", "Korhonen", true, 4), 100)
      .await
      .unwrap();
    assert_eq!(receipt.total_guests, 4);
    assert_eq!(receipt.record.id, 1);
    assert_eq!(receipt.locale, Locale::En);

    let declined = submit(&store, body("Mikko", "Nieminen", false, 3), 100)
      .await
      .unwrap();
    assert_eq!(declined.total_guests, 4);
  }

  #[tokio::test]
  async fn invalid_content_never_reaches_the_store() {
    let store = MemoryStore::default();
    let err = submit(&store, body("Anna", "Korhonen", true, 11), 100)
      .await
      .unwrap_err();
    assert!(matches!(err, SubmitError::Rejected(Rejection::InvalidGuestCount)));
    assert!(store.rows.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn store_outcomes_map_to_rejections() {
    let store = MemoryStore::default();
    for last in ["Aho", "Blom", "Ek", "Forss", "Holm", "Ilves", "Jokela", "Kallio", "Lahti"] {
      submit(&store, body("Guest", last, true, 10), 100).await.unwrap();
    }
    let receipt = submit(&store, body("Anna", "Korhonen", true, 8), 100)
      .await
      .unwrap();
    assert_eq!(receipt.total_guests, 98);

    let dup = submit(&store, body("ANNA", "korhonen", true, 1), 100)
      .await
      .unwrap_err();
    assert!(matches!(dup, SubmitError::Rejected(Rejection::DuplicateSubmission)));

    let full = submit(&store, body("Liisa", "Mäkinen", true, 5), 100)
      .await
      .unwrap_err();
    assert!(matches!(
      full,
      SubmitError::Rejected(Rejection::CapacityExceeded { capacity: 100 })
    ));
    assert_eq!(store.rows.lock().unwrap().len(), 10);
  }

  #[tokio::test]
  async fn stats_tally_the_store() {
    let store = MemoryStore::default();
    submit(&store, body("Anna", "Korhonen", true, 2), 100).await.unwrap();
    submit(&store, body("Mikko", "Nieminen", true, 3), 100).await.unwrap();
    submit(&store, body("Liisa", "Mäkinen", true, 1), 100).await.unwrap();
    submit(&store, body("Juha", "Laine", false, 1), 100).await.unwrap();

    let stats = stats(&store).await.unwrap();
    assert_eq!(stats.total_responses, 4);
    assert_eq!(stats.attending_count, 3);
    assert_eq!(stats.total_guests, 6);
    assert_eq!(stats.responses[0].first_name, "Juha");
  }
}
