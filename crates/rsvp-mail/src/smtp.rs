//! SMTP delivery via `lettre`.

use lettre::{
  AsyncSmtpTransport, AsyncTransport as _, Message, Tokio1Executor,
  message::{Mailbox, header::ContentType},
  transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{Confirmation, Mailer, Result};

/// SMTP relay settings, deserialised from the `[mail]` config section.
#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
  pub smtp_host:     String,
  #[serde(default = "default_port")]
  pub smtp_port:     u16,
  pub smtp_user:     Option<String>,
  pub smtp_password: Option<String>,
  /// RFC 5322 "From", e.g. `Party RSVP <rsvp@example.com>`.
  pub from_address:  String,
  /// Upgrade the connection with STARTTLS. Turn off only for local relays
  /// such as a development mail catcher.
  #[serde(default = "default_starttls")]
  pub starttls:      bool,
}

fn default_port() -> u16 { 587 }

fn default_starttls() -> bool { true }

/// Sends confirmations through an SMTP relay.
pub struct SmtpMailer {
  transport: AsyncSmtpTransport<Tokio1Executor>,
  from:      Mailbox,
}

impl SmtpMailer {
  /// Build the transport. No connection is made until the first send.
  pub fn new(config: &SmtpConfig) -> Result<Self> {
    let from: Mailbox = config.from_address.parse()?;

    let builder = if config.starttls {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
    };
    let mut builder = builder.port(config.smtp_port);

    if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
      builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
    }

    Ok(Self { transport: builder.build(), from })
  }
}

impl Mailer for SmtpMailer {
  type Error = crate::Error;

  async fn send(&self, confirmation: &Confirmation) -> Result<()> {
    let message = Message::builder()
      .from(self.from.clone())
      .to(confirmation.to.parse()?)
      .subject(confirmation.subject.clone())
      .header(ContentType::TEXT_PLAIN)
      .body(confirmation.body.clone())?;

    self.transport.send(message).await?;
    tracing::info!(to = %confirmation.to, "confirmation mail sent");
    Ok(())
  }
}
