//! Error type for `rsvp-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored integer does not fit the domain type it decodes into.
  #[error("column {column} holds out-of-range value {value}")]
  OutOfRange { column: &'static str, value: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
