//! Persisted RSVP records and their public projection.
//!
//! A record is created exactly once, when a submission is accepted, and is
//! never updated or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::submission::Submission;

// ─── NewRsvp ─────────────────────────────────────────────────────────────────

/// Input to [`crate::store::RsvpStore::admit`].
///
/// `id`, `created_at` and `updated_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        Option<String>,
  pub is_attending: bool,
  pub guest_count:  u8,
  pub message:      Option<String>,
  /// When the submission was accepted.
  pub submitted_at: DateTime<Utc>,
}

impl NewRsvp {
  /// Map a validated submission to the row that will be stored. The locale
  /// only steers the confirmation mail and is not persisted.
  pub fn from_submission(
    submission: &Submission,
    submitted_at: DateTime<Utc>,
  ) -> Self {
    Self {
      first_name: submission.first_name.clone(),
      last_name: submission.last_name.clone(),
      email: submission.email.clone(),
      is_attending: submission.is_attending,
      guest_count: submission.guest_count,
      message: submission.message.clone(),
      submitted_at,
    }
  }

  /// Seats claimed against the capacity; zero when declining.
  pub fn seats(&self) -> u32 {
    if self.is_attending { u32::from(self.guest_count) } else { 0 }
  }
}

// ─── RsvpRecord ──────────────────────────────────────────────────────────────

/// A stored RSVP row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRecord {
  /// Monotonic, server-assigned.
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        Option<String>,
  pub is_attending: bool,
  pub guest_count:  u8,
  pub message:      Option<String>,
  /// Submission time.
  pub timestamp:    DateTime<Utc>,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
}

impl RsvpRecord {
  pub fn seats(&self) -> u32 {
    if self.is_attending { u32::from(self.guest_count) } else { 0 }
  }

  /// Project onto the fields exposed to the host's dashboard.
  pub fn view(&self) -> ResponseView {
    ResponseView {
      first_name:   self.first_name.clone(),
      last_name:    self.last_name.clone(),
      email:        self.email.clone(),
      is_attending: self.is_attending,
      guest_count:  self.guest_count,
      message:      self.message.clone(),
      timestamp:    self.timestamp,
    }
  }
}

// ─── ResponseView ────────────────────────────────────────────────────────────

/// The public shape of a record as returned by `GET /rsvp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseView {
  pub first_name:   String,
  pub last_name:    String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:        Option<String>,
  pub is_attending: bool,
  pub guest_count:  u8,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message:      Option<String>,
  pub timestamp:    DateTime<Utc>,
}
