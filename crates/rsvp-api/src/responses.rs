//! Dashboard reads.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/rsvp` | Aggregate counts plus every response, newest first |
//! | `GET`  | `/rsvp/export.csv` | Same responses as a CSV attachment |

use axum::{
  Json,
  extract::State,
  http::header,
  response::IntoResponse,
};
use chrono::Utc;
use rsvp_core::{export, service, stats::RsvpStats, store::RsvpStore};
use rsvp_mail::Mailer;

use crate::{ApiState, auth::AdminAccess, error::ApiError};

const FETCH_FAILED: &str = "Failed to fetch RSVP data";

// ─── Stats ───────────────────────────────────────────────────────────────────

/// `GET /rsvp`
pub async fn stats<S, M>(
  _: AdminAccess,
  State(state): State<ApiState<S, M>>,
) -> Result<Json<RsvpStats>, ApiError>
where
  S: RsvpStore + 'static,
  M: Mailer + 'static,
{
  let stats = service::stats(state.store.as_ref())
    .await
    .map_err(|e| ApiError::internal(FETCH_FAILED, e))?;
  Ok(Json(stats))
}

// ─── CSV export ──────────────────────────────────────────────────────────────

/// `GET /rsvp/export.csv`
pub async fn export_csv<S, M>(
  _: AdminAccess,
  State(state): State<ApiState<S, M>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RsvpStore + 'static,
  M: Mailer + 'static,
{
  let stats = service::stats(state.store.as_ref())
    .await
    .map_err(|e| ApiError::internal(FETCH_FAILED, e))?;

  let disposition = format!(
    "attachment; filename=\"{}\"",
    export::file_name(Utc::now().date_naive())
  );
  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
      (header::CONTENT_DISPOSITION, disposition),
    ],
    export::to_csv(&stats.responses),
  ))
}
