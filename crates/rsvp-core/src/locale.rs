//! Supported languages and RSVP outcomes.

use serde::{Deserialize, Serialize};

/// A language the confirmation mail can be written in.
///
/// The discriminants double as row indices into the template table in
/// `rsvp-mail`; keep them dense and starting at zero.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  Sv = 0,
  Fi = 1,
  #[default]
  En = 2,
}

impl Locale {
  pub const ALL: [Locale; 3] = [Locale::Sv, Locale::Fi, Locale::En];

  /// Resolve a client-supplied language tag such as `sv`, `fi-FI` or
  /// `en_GB`. Only the primary subtag is considered; anything unrecognised
  /// falls back to English.
  pub fn from_tag(tag: &str) -> Self {
    let primary = tag
      .trim()
      .split(['-', '_'])
      .next()
      .unwrap_or_default()
      .to_ascii_lowercase();
    match primary.as_str() {
      "sv" => Self::Sv,
      "fi" => Self::Fi,
      _ => Self::En,
    }
  }

  pub fn code(self) -> &'static str {
    match self {
      Self::Sv => "sv",
      Self::Fi => "fi",
      Self::En => "en",
    }
  }
}

/// Whether the guest is coming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
  Attending = 0,
  NotAttending = 1,
}

impl Outcome {
  pub const ALL: [Outcome; 2] = [Outcome::Attending, Outcome::NotAttending];

  pub fn from_attending(is_attending: bool) -> Self {
    if is_attending { Self::Attending } else { Self::NotAttending }
  }
}
