//! The `RsvpStore` trait and the outcome of an admission attempt.
//!
//! The trait is implemented by storage backends (e.g. `rsvp-store-sqlite`).
//! Higher layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::{NewRsvp, RsvpRecord};

/// What the store decided about a [`NewRsvp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
  /// The row was inserted. `total_guests` is the attending total including
  /// this submission.
  Accepted {
    record:       RsvpRecord,
    total_guests: u32,
  },
  /// The name pair or email is already on file. Nothing was written.
  Duplicate,
  /// Accepting would push attending guests past the capacity. Nothing was
  /// written.
  OverCapacity { current_total: u32 },
}

/// Abstraction over an RSVP store backend.
///
/// Records are append-only: there is no update or delete.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RsvpStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Check for duplicates and remaining capacity, then insert.
  ///
  /// Implementations must make the checks and the insert atomic with respect
  /// to every other writer of the same storage, including other processes;
  /// an in-process lock is not enough.
  fn admit(
    &self,
    rsvp: NewRsvp,
    capacity: u32,
  ) -> impl Future<Output = Result<Admission, Self::Error>> + Send + '_;

  /// Every stored record, most recent first.
  fn list_responses(
    &self,
  ) -> impl Future<Output = Result<Vec<RsvpRecord>, Self::Error>> + Send + '_;
}
