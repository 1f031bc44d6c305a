//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use rsvp_core::Rejection;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. Every variant renders as
/// `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  Conflict(String),

  #[error("unauthorized")]
  Unauthorized,

  /// A fault the client cannot fix. Only `context` reaches the client.
  #[error("{context}: {source}")]
  Internal {
    context: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn internal<E>(context: &'static str, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Internal { context, source: Box::new(source) }
  }
}

impl From<Rejection> for ApiError {
  fn from(reason: Rejection) -> Self {
    if reason.is_conflict() {
      ApiError::Conflict(reason.to_string())
    } else {
      ApiError::BadRequest(reason.to_string())
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m),
      ApiError::Unauthorized => {
        let mut res = (
          StatusCode::UNAUTHORIZED,
          Json(json!({ "error": "unauthorized" })),
        )
          .into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Basic realm=\"rsvp\""),
        );
        return res;
      }
      ApiError::Internal { context, source } => {
        tracing::error!(error = %source, "{context}");
        (StatusCode::INTERNAL_SERVER_ERROR, context.to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
