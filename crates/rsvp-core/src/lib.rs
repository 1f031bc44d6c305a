//! Core types and trait definitions for the RSVP service.
//!
//! This crate is deliberately free of HTTP, database and mail dependencies.
//! Every other crate depends on it.

pub mod error;
pub mod export;
pub mod locale;
pub mod record;
pub mod service;
pub mod stats;
pub mod store;
pub mod submission;

pub use error::Rejection;
