//! The mailer the server actually runs with.

use crate::{Confirmation, Mailer, Result, SmtpConfig, SmtpMailer};

/// SMTP when configured, otherwise a no-op that logs what it would have sent.
pub enum Outbox {
  Smtp(SmtpMailer),
  Disabled,
}

impl Outbox {
  pub fn from_config(config: Option<&SmtpConfig>) -> Result<Self> {
    match config {
      Some(cfg) => Ok(Self::Smtp(SmtpMailer::new(cfg)?)),
      None => Ok(Self::Disabled),
    }
  }

  pub fn is_enabled(&self) -> bool { matches!(self, Self::Smtp(_)) }
}

impl Mailer for Outbox {
  type Error = crate::Error;

  async fn send(&self, confirmation: &Confirmation) -> Result<()> {
    match self {
      Self::Smtp(mailer) => mailer.send(confirmation).await,
      Self::Disabled => {
        tracing::info!(
          to = %confirmation.to,
          subject = %confirmation.subject,
          "mail not configured; confirmation skipped"
        );
        Ok(())
      }
    }
  }
}
