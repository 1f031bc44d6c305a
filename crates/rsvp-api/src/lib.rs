//! JSON HTTP API for the RSVP service.
//!
//! Exposes an axum [`Router`] backed by any [`RsvpStore`] and [`Mailer`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = rsvp_api::router(state).layer(TraceLayer::new_for_http());
//! ```

pub mod auth;
pub mod dispatch;
pub mod error;
pub mod responses;
pub mod submit;

use std::sync::Arc;

use axum::{Router, routing::get};
use rsvp_core::store::RsvpStore;
use rsvp_mail::Mailer;

pub use auth::AdminCredentials;
pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct ApiState<S, M> {
  pub store:    Arc<S>,
  pub mailer:   Arc<M>,
  /// Cap on attending guests.
  pub capacity: u32,
  /// `None` leaves the dashboard endpoints open.
  pub admin:    Option<Arc<AdminCredentials>>,
}

impl<S, M> Clone for ApiState<S, M> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      mailer:   Arc::clone(&self.mailer),
      capacity: self.capacity,
      admin:    self.admin.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
pub fn router<S, M>(state: ApiState<S, M>) -> Router
where
  S: RsvpStore + 'static,
  M: Mailer + 'static,
{
  Router::new()
    .route("/rsvp", get(responses::stats::<S, M>).post(submit::handler::<S, M>))
    .route("/rsvp/export.csv", get(responses::export_csv::<S, M>))
    .with_state(state)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
