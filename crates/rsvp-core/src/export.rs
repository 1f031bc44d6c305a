//! CSV export of stored responses.
//!
//! Every field is wrapped in double quotes with embedded quotes doubled, so
//! commas and newlines inside messages survive a spreadsheet import.

use chrono::{NaiveDate, SecondsFormat};

use crate::record::ResponseView;

pub const HEADERS: [&str; 7] = [
  "First Name",
  "Last Name",
  "Email",
  "Attending",
  "Guest Count",
  "Message",
  "Timestamp",
];

/// Render `responses` as CSV text, header row first, rows joined with `\n`.
pub fn to_csv(responses: &[ResponseView]) -> String {
  let mut lines = Vec::with_capacity(responses.len() + 1);
  lines.push(HEADERS.join(","));
  for r in responses {
    let fields = [
      r.first_name.clone(),
      r.last_name.clone(),
      r.email.clone().unwrap_or_default(),
      if r.is_attending { "Yes" } else { "No" }.to_owned(),
      r.guest_count.to_string(),
      r.message.clone().unwrap_or_default(),
      r.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
    ];
    lines.push(
      fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(","),
    );
  }
  lines.join("\n")
}

/// `rsvp-responses-YYYY-MM-DD.csv`
pub fn file_name(date: NaiveDate) -> String {
  format!("rsvp-responses-{}.csv", date.format("%Y-%m-%d"))
}

fn quote(field: &str) -> String { format!("\"{}\"", field.replace('"', "\"\"")) }
