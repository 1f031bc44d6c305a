//! Fire-and-forget confirmation delivery.

use std::sync::Arc;

use rsvp_core::service::Receipt;
use rsvp_mail::{Confirmation, Mailer};
use tokio::task::JoinHandle;

/// Render the confirmation for `receipt` and send it on a detached task.
///
/// Returns `None` when the guest gave no email. A failed send is logged and
/// otherwise ignored; the submission has already been stored.
pub fn confirm<M>(mailer: Arc<M>, receipt: &Receipt) -> Option<JoinHandle<()>>
where
  M: Mailer + 'static,
{
  let confirmation = Confirmation::for_record(&receipt.record, receipt.locale)?;
  let id = receipt.record.id;
  let locale = receipt.locale.code();

  Some(tokio::spawn(async move {
    if let Err(error) = mailer.send(&confirmation).await {
      tracing::warn!(id, locale, to = %confirmation.to, %error, "confirmation mail failed");
    }
  }))
}

#[cfg(test)]
mod tests {
  use std::{io, sync::Mutex};

  use chrono::Utc;
  use rsvp_core::{locale::Locale, record::RsvpRecord};

  use super::*;

  #[derive(Default)]
  struct Outbox {
    sent: Mutex<Vec<Confirmation>>,
    fail: bool,
  }

  impl Mailer for Outbox {
    type Error = io::Error;

    async fn send(&self, confirmation: &Confirmation) -> Result<(), io::Error> {
      if self.fail {
        return Err(io::Error::other("relay unreachable"));
      }
      self.sent.lock().unwrap().push(confirmation.clone());
      Ok(())
    }
  }

  fn receipt(email: Option<&str>, locale: Locale) -> Receipt {
    let now = Utc::now();
    Receipt {
      record: RsvpRecord {
        id:           7,
        first_name:   "Åsa".into(),
        last_name:    "Öberg".into(),
        email:        email.map(str::to_owned),
        is_attending: true,
        guest_count:  2,
        message:      None,
        timestamp:    now,
        created_at:   now,
        updated_at:   now,
      },
      total_guests: 2,
      locale,
    }
  }

  #[tokio::test]
  async fn sends_in_the_requested_language() {
    let outbox = Arc::new(Outbox::default());
    let handle = confirm(outbox.clone(), &receipt(Some("asa@example.se"), Locale::Sv))
      .expect("guest left an email");
    handle.await.unwrap();

    let sent = outbox.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "asa@example.se");
    assert_eq!(sent[0].subject, "Vi ses på festen!");
  }

  #[tokio::test]
  async fn nothing_is_spawned_without_an_email() {
    let outbox = Arc::new(Outbox::default());
    assert!(confirm(outbox.clone(), &receipt(None, Locale::Sv)).is_none());
    assert!(outbox.sent.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn failed_send_is_swallowed() {
    let outbox = Arc::new(Outbox { fail: true, ..Default::default() });
    let handle = confirm(outbox, &receipt(Some("asa@example.se"), Locale::En)).unwrap();
    assert!(handle.await.is_ok());
  }
}
