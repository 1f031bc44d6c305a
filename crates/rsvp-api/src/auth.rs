//! HTTP Basic auth for the dashboard endpoints.
//!
//! Only active when the server is configured with [`AdminCredentials`];
//! otherwise [`AdminAccess`] always succeeds.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use rsvp_core::store::RsvpStore;
use rsvp_mail::Mailer;
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

/// The one account allowed to read responses.
#[derive(Clone, Deserialize)]
pub struct AdminCredentials {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Present in a handler means the caller may read responses.
pub struct AdminAccess;

/// Check a `Basic` authorization header against `creds`.
pub fn verify_basic(headers: &HeaderMap, creds: &AdminCredentials) -> Result<(), ApiError> {
  let encoded = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Basic "))
    .ok_or(ApiError::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| ApiError::Unauthorized)?;
  let pair = std::str::from_utf8(&decoded).map_err(|_| ApiError::Unauthorized)?;
  let (username, password) = pair.split_once(':').ok_or(ApiError::Unauthorized)?;

  if username != creds.username {
    return Err(ApiError::Unauthorized);
  }

  let hash = PasswordHash::new(&creds.password_hash).map_err(|e| {
    tracing::error!(error = %e, "configured admin password hash is not a PHC string");
    ApiError::Unauthorized
  })?;

  Argon2::default()
    .verify_password(password.as_bytes(), &hash)
    .map_err(|_| ApiError::Unauthorized)
}

impl<S, M> FromRequestParts<ApiState<S, M>> for AdminAccess
where
  S: RsvpStore + 'static,
  M: Mailer + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &ApiState<S, M>,
  ) -> Result<Self, Self::Rejection> {
    if let Some(creds) = &state.admin {
      verify_basic(&parts.headers, creds)?;
    }
    Ok(AdminAccess)
  }
}
