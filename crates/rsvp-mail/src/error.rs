//! Error type for `rsvp-mail`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// SMTP transport-level failure (authentication, connection, etc.).
  #[error("smtp transport error: {0}")]
  Transport(#[from] lettre::transport::smtp::Error),

  /// The recipient or sender address could not be parsed.
  #[error("address parse error: {0}")]
  Address(#[from] lettre::address::AddressError),

  /// The MIME message could not be assembled.
  #[error("message build error: {0}")]
  Build(#[from] lettre::error::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
