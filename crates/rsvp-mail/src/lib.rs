//! Confirmation mail for accepted RSVPs.
//!
//! [`Confirmation::for_record`] picks a template from the static
//! `(locale, outcome)` table and renders it; a [`Mailer`] delivers it.
//! Delivery is best-effort: callers log failures and move on.

pub mod error;
pub mod outbox;
pub mod smtp;
pub mod templates;

use std::future::Future;

use rsvp_core::{
  locale::{Locale, Outcome},
  record::RsvpRecord,
};

pub use error::{Error, Result};
pub use outbox::Outbox;
pub use smtp::{SmtpConfig, SmtpMailer};

use templates::{TemplateArgs, template};

/// A rendered confirmation, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
  pub to:      String,
  pub subject: String,
  pub body:    String,
}

impl Confirmation {
  /// Render the confirmation for `record` in `locale`. Returns `None` when
  /// the guest left no email address.
  pub fn for_record(record: &RsvpRecord, locale: Locale) -> Option<Self> {
    let to = record.email.clone()?;
    let t = template(locale, Outcome::from_attending(record.is_attending));
    let args = TemplateArgs {
      name:        &record.first_name,
      guest_count: record.guest_count,
      message:     record.message.as_deref(),
    };
    Some(Self {
      to,
      subject: t.subject.to_owned(),
      body: (t.body)(&args),
    })
  }
}

/// Something that can deliver a [`Confirmation`].
pub trait Mailer: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Make a single delivery attempt.
  fn send(
    &self,
    confirmation: &Confirmation,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
