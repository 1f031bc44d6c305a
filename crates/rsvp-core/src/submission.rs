//! Raw and validated RSVP submissions.
//!
//! [`RawSubmission`] mirrors the JSON body posted by the public form and is
//! deliberately lenient: every field is optional so that missing or
//! mistyped values surface as a [`Rejection`] instead of a deserialisation
//! failure. [`RawSubmission::validate`] turns it into a [`Submission`], whose
//! fields are guaranteed to satisfy every content rule.

use serde::Deserialize;
use serde_json::Value;
use unicode_normalization::UnicodeNormalization as _;

use crate::{Rejection, locale::Locale};

/// Longest accepted first or last name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Inclusive bounds on the size of a party.
pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 10;

// ─── Raw ─────────────────────────────────────────────────────────────────────

/// A submission as received, before any trimming or validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
  #[serde(default)]
  pub first_name:   Option<String>,
  #[serde(default)]
  pub last_name:    Option<String>,
  #[serde(default)]
  pub email:        Option<String>,
  #[serde(default)]
  pub is_attending: Option<bool>,
  /// Kept as a raw JSON value so that `2.5` or `"3"` are reported as an
  /// invalid guest count.
  #[serde(default)]
  pub guest_count:  Option<Value>,
  #[serde(default)]
  pub message:      Option<String>,
  #[serde(default)]
  pub language:     Option<String>,
}

// ─── Validated ───────────────────────────────────────────────────────────────

/// A submission whose every field has been sanitised and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        Option<String>,
  pub is_attending: bool,
  /// Always within `MIN_GUESTS..=MAX_GUESTS`. Stored as submitted even when
  /// the guest declines; capacity arithmetic ignores it in that case.
  pub guest_count:  u8,
  pub message:      Option<String>,
  pub locale:       Locale,
}

impl Submission {
  /// How many seats this submission claims against the capacity.
  pub fn seats(&self) -> u32 {
    if self.is_attending { u32::from(self.guest_count) } else { 0 }
  }
}

impl RawSubmission {
  /// Sanitise and validate, short-circuiting on the first failing rule.
  ///
  /// Rules run in a fixed order: required names, name length, email shape,
  /// name characters, guest count, message length.
  pub fn validate(self) -> Result<Submission, Rejection> {
    let first_name = trimmed(self.first_name)
      .map(composed)
      .ok_or(Rejection::MissingName)?;
    let last_name = trimmed(self.last_name)
      .map(composed)
      .ok_or(Rejection::MissingName)?;
    let email = trimmed(self.email);
    let message = trimmed(self.message);

    if first_name.chars().count() > MAX_NAME_CHARS
      || last_name.chars().count() > MAX_NAME_CHARS
    {
      return Err(Rejection::NameTooLong);
    }

    if let Some(address) = &email
      && !is_plausible_email(address)
    {
      return Err(Rejection::InvalidEmail);
    }

    if !is_valid_name(&first_name) || !is_valid_name(&last_name) {
      return Err(Rejection::InvalidNameFormat);
    }

    let guest_count =
      parse_guest_count(self.guest_count.as_ref()).ok_or(Rejection::InvalidGuestCount)?;

    if message
      .as_deref()
      .is_some_and(|m| m.chars().count() > MAX_MESSAGE_CHARS)
    {
      return Err(Rejection::MessageTooLong);
    }

    Ok(Submission {
      first_name,
      last_name,
      email,
      is_attending: self.is_attending.unwrap_or(false),
      guest_count,
      message,
      locale: self
        .language
        .as_deref()
        .map(Locale::from_tag)
        .unwrap_or_default(),
    })
  }
}

// ─── Field rules ─────────────────────────────────────────────────────────────

/// Trim surrounding whitespace; an empty result counts as absent.
fn trimmed(value: Option<String>) -> Option<String> {
  let value = value?;
  let trimmed = value.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_owned())
  }
}

/// NFC, so `a` + U+0308 arrives as the single letter `ä` before length and
/// character checks.
fn composed(name: String) -> String { name.nfc().collect() }

/// Letters from Basic Latin, Latin-1 Supplement and Latin Extended-A/B, plus
/// space, hyphen and straight or typographic apostrophe.
fn is_name_char(c: char) -> bool {
  match c {
    'a'..='z' | 'A'..='Z' | ' ' | '-' | '\'' | '\u{2019}' => true,
    // multiplication and division signs sit inside the Latin-1 letter block
    '\u{00D7}' | '\u{00F7}' => false,
    // click letters, which read as `|` and `!`
    '\u{01C0}'..='\u{01C3}' => false,
    '\u{00C0}'..='\u{024F}' => true,
    _ => false,
  }
}

fn is_valid_name(name: &str) -> bool { name.chars().all(is_name_char) }

/// `local@domain.tld`: exactly one `@`, no whitespace, and a dot inside the
/// domain with something on both sides of it.
pub fn is_plausible_email(address: &str) -> bool {
  if address.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = address.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  domain
    .char_indices()
    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Accept JSON integers (and integral floats such as `4.0`) in range.
fn parse_guest_count(value: Option<&Value>) -> Option<u8> {
  let Some(Value::Number(n)) = value else {
    return None;
  };
  let whole = match n.as_i64() {
    Some(i) => i,
    None => {
      let f = n.as_f64()?;
      if f.fract() != 0.0 || !f.is_finite() {
        return None;
      }
      f as i64
    }
  };
  u8::try_from(whole)
    .ok()
    .filter(|g| (MIN_GUESTS..=MAX_GUESTS).contains(g))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn raw(first: &str, last: &str) -> RawSubmission {
    RawSubmission {
      first_name: Some(first.into()),
      last_name: Some(last.into()),
      is_attending: Some(true),
      guest_count: Some(json!(1)),
      ..Default::default()
    }
  }

  #[test]
  fn trims_and_accepts_a_minimal_submission() {
    let mut input = raw("  Anna ", " Korhonen");
    input.email = Some("  anna@example.fi ".into());
    input.message = Some("   ".into());

    let sub = input.validate().unwrap();
    assert_eq!(sub.first_name, "Anna");
    assert_eq!(sub.last_name, "Korhonen");
    assert_eq!(sub.email.as_deref(), Some("anna@example.fi"));
    assert_eq!(sub.message, None);
    assert_eq!(sub.locale, Locale::En);
  }

  #[test]
  fn missing_or_blank_names_are_rejected() {
    assert_eq!(raw("", "Korhonen").validate(), Err(Rejection::MissingName));
    assert_eq!(raw("Anna", "   ").validate(), Err(Rejection::MissingName));

    let mut no_last = raw("Anna", "x");
    no_last.last_name = None;
    assert_eq!(no_last.validate(), Err(Rejection::MissingName));
  }

  #[test]
  fn name_length_is_counted_in_characters() {
    let fifty_a = "ä".repeat(50);
    assert!(raw(&fifty_a, "Korhonen").validate().is_ok());

    let fifty_one = "a".repeat(51);
    assert_eq!(
      raw("Anna", &fifty_one).validate(),
      Err(Rejection::NameTooLong)
    );
  }

  #[test]
  fn email_shape() {
    assert!(is_plausible_email("a@b.co"));
    assert!(is_plausible_email("first.last+tag@sub.example.org"));
    assert!(!is_plausible_email("no-at-sign.example.com"));
    assert!(!is_plausible_email("a@b"));
    assert!(!is_plausible_email("a@.com"));
    assert!(!is_plausible_email("a@b."));
    assert!(!is_plausible_email("@b.com"));
    assert!(!is_plausible_email("a@@b.com"));
    assert!(!is_plausible_email("a b@c.com"));
  }

  #[test]
  fn invalid_email_is_checked_before_name_characters() {
    let mut input = raw("R2D2", "Droid");
    input.email = Some("not-an-email".into());
    assert_eq!(input.validate(), Err(Rejection::InvalidEmail));
  }

  #[test]
  fn nordic_and_spanish_names_are_accepted() {
    for (first, last) in [
      ("Åsa", "Öberg"),
      ("Päivi", "Häkkinen"),
      ("Søren", "Kierkegaard"),
      ("José", "Muñoz-García"),
      ("Siobhán", "O'Brien"),
      ("Mary Ann", "D\u{2019}Angelo"),
    ] {
      assert!(raw(first, last).validate().is_ok(), "{first} {last}");
    }
  }

  #[test]
  fn decomposed_accents_are_composed_before_checking() {
    let submission = raw("Pa\u{0308}ivi", "Ha\u{0308}kkinen").validate().unwrap();
    assert_eq!(submission.first_name, "Päivi");
    assert_eq!(submission.last_name, "Häkkinen");

    // fifty letters once composed, a hundred code points before
    let long = "a\u{0308}".repeat(MAX_NAME_CHARS);
    assert!(raw(&long, "Korhonen").validate().is_ok());
  }

  #[test]
  fn click_letters_are_not_name_characters() {
    for c in ['\u{01C0}', '\u{01C1}', '\u{01C2}', '\u{01C3}'] {
      assert_eq!(
        raw(&format!("Anna{c}"), "Korhonen").validate(),
        Err(Rejection::InvalidNameFormat),
        "{c:?}"
      );
    }
    assert!(raw("Ștefan", "Țurcanu").validate().is_ok());
  }

  #[test]
  fn digits_and_symbols_in_names_are_rejected() {
    for (first, last) in [
      ("Anna1", "Korhonen"),
      ("Anna", "Kor<script>"),
      ("Anna", "Korhonen!"),
      ("Anna", "Kor×honen"),
      ("Анна", "Korhonen"),
    ] {
      assert_eq!(
        raw(first, last).validate(),
        Err(Rejection::InvalidNameFormat),
        "{first} {last}"
      );
    }
  }

  #[test]
  fn guest_count_bounds() {
    for (value, ok) in [
      (json!(0), false),
      (json!(1), true),
      (json!(10), true),
      (json!(11), false),
      (json!(-1), false),
      (json!(2.5), false),
      (json!(4.0), true),
      (json!("3"), false),
      (json!(null), false),
    ] {
      let mut input = raw("Anna", "Korhonen");
      input.guest_count = Some(value.clone());
      assert_eq!(input.validate().is_ok(), ok, "guest count {value}");
    }

    let mut missing = raw("Anna", "Korhonen");
    missing.guest_count = None;
    assert_eq!(missing.validate(), Err(Rejection::InvalidGuestCount));
  }

  #[test]
  fn message_limit_is_inclusive() {
    let mut at_limit = raw("Anna", "Korhonen");
    at_limit.message = Some("ö".repeat(500));
    assert!(at_limit.validate().is_ok());

    let mut over = raw("Anna", "Korhonen");
    over.message = Some("x".repeat(501));
    assert_eq!(over.validate(), Err(Rejection::MessageTooLong));
  }

  #[test]
  fn declined_submissions_claim_no_seats() {
    let mut input = raw("Anna", "Korhonen");
    input.is_attending = Some(false);
    input.guest_count = Some(json!(3));
    let sub = input.validate().unwrap();
    assert_eq!(sub.guest_count, 3);
    assert_eq!(sub.seats(), 0);
  }

  #[test]
  fn language_selects_locale() {
    let mut input = raw("Anna", "Korhonen");
    input.language = Some("fi".into());
    assert_eq!(input.validate().unwrap().locale, Locale::Fi);
  }

  #[test]
  fn deserialises_camel_case_body() {
    let body = json!({
      "firstName": "Anna",
      "lastName": "Korhonen",
      "isAttending": true,
      "guestCount": 4,
      "language": "sv"
    });
    let input: RawSubmission = serde_json::from_value(body).unwrap();
    let sub = input.validate().unwrap();
    assert_eq!(sub.guest_count, 4);
    assert!(sub.is_attending);
    assert_eq!(sub.locale, Locale::Sv);
  }
}
