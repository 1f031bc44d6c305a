//! `POST /rsvp`

use axum::{Json, extract::{State, rejection::JsonRejection}};
use rsvp_core::{
  service::{self, SubmitError},
  store::RsvpStore,
  submission::RawSubmission,
};
use rsvp_mail::Mailer;
use serde::Serialize;

use crate::{ApiState, dispatch, error::ApiError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
  pub success:      bool,
  pub message:      &'static str,
  pub total_guests: u32,
  pub id:           i64,
}

pub async fn handler<S, M>(
  State(state): State<ApiState<S, M>>,
  body: Result<Json<RawSubmission>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError>
where
  S: RsvpStore + 'static,
  M: Mailer + 'static,
{
  let Json(raw) = body.map_err(|e| {
    tracing::debug!(error = %e, "unreadable submission body");
    ApiError::BadRequest("Invalid request body".into())
  })?;

  let receipt = match service::submit(state.store.as_ref(), raw, state.capacity).await {
    Ok(receipt) => receipt,
    Err(SubmitError::Rejected(reason)) => {
      tracing::debug!(%reason, "submission rejected");
      return Err(reason.into());
    }
    Err(SubmitError::Store(e)) => {
      return Err(ApiError::internal("Failed to submit RSVP", e));
    }
  };

  tracing::info!(
    id = receipt.record.id,
    total_guests = receipt.total_guests,
    attending = receipt.record.is_attending,
    "rsvp accepted"
  );

  dispatch::confirm(state.mailer.clone(), &receipt);

  Ok(Json(SubmitResponse {
    success:      true,
    message:      "RSVP submitted successfully!",
    total_guests: receipt.total_guests,
    id:           receipt.record.id,
  }))
}
