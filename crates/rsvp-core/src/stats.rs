//! Aggregate statistics over stored records.

use serde::{Deserialize, Serialize};

use crate::record::{ResponseView, RsvpRecord};

/// The read model behind `GET /rsvp`. Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStats {
  pub total_responses: usize,
  pub attending_count: usize,
  /// Sum of guest counts over attending records.
  pub total_guests:    u32,
  /// Every record, in the order given (most recent first when read from a
  /// store).
  pub responses:       Vec<ResponseView>,
}

impl RsvpStats {
  pub fn from_records(records: &[RsvpRecord]) -> Self {
    let attending = records.iter().filter(|r| r.is_attending);
    Self {
      total_responses: records.len(),
      attending_count: attending.clone().count(),
      total_guests:    attending.map(RsvpRecord::seats).sum(),
      responses:       records.iter().map(RsvpRecord::view).collect(),
    }
  }
}
