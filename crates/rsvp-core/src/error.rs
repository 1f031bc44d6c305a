//! Rejection reasons for `rsvp-core`.

use thiserror::Error;

/// Why a submission was turned away.
///
/// The `Display` text is shown to the guest verbatim, so it is written for
/// people rather than for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
  #[error("First name and last name are required")]
  MissingName,

  #[error("First name and last name must be 50 characters or fewer")]
  NameTooLong,

  #[error("Please enter a valid email address")]
  InvalidEmail,

  #[error(
    "Names may only contain letters, spaces, hyphens and apostrophes"
  )]
  InvalidNameFormat,

  #[error("Guest count must be between 1 and 10")]
  InvalidGuestCount,

  #[error("Message must be 500 characters or fewer")]
  MessageTooLong,

  #[error("An RSVP with this name or email address has already been submitted")]
  DuplicateSubmission,

  #[error("Sorry, we've reached our maximum capacity of {capacity} guests!")]
  CapacityExceeded { capacity: u32 },
}

impl Rejection {
  /// `true` for rejections caused by existing state rather than by the
  /// submission's own content.
  pub fn is_conflict(&self) -> bool {
    matches!(self, Self::DuplicateSubmission | Self::CapacityExceeded { .. })
  }
}
