//! Confirmation mail templates.
//!
//! One template per `(Locale, Outcome)` pair, laid out as a dense table
//! indexed by the enums' discriminants. Selecting a template is a plain
//! index; rendering is a pure function of the guest's name, party size and
//! message.

use rsvp_core::locale::{Locale, Outcome};

/// The values a template may interpolate.
#[derive(Debug, Clone, Copy)]
pub struct TemplateArgs<'a> {
  pub name:        &'a str,
  pub guest_count: u8,
  pub message:     Option<&'a str>,
}

pub struct Template {
  pub locale:  Locale,
  pub outcome: Outcome,
  pub subject: &'static str,
  pub body:    fn(&TemplateArgs<'_>) -> String,
}

/// Rows follow `Locale` discriminants, columns follow `Outcome`.
static TEMPLATES: [[Template; 2]; 3] = [
  [
    Template {
      locale:  Locale::Sv,
      outcome: Outcome::Attending,
      subject: "Vi ses på festen!",
      body:    sv_attending,
    },
    Template {
      locale:  Locale::Sv,
      outcome: Outcome::NotAttending,
      subject: "Tack för att du hörde av dig",
      body:    sv_not_attending,
    },
  ],
  [
    Template {
      locale:  Locale::Fi,
      outcome: Outcome::Attending,
      subject: "Nähdään juhlissa!",
      body:    fi_attending,
    },
    Template {
      locale:  Locale::Fi,
      outcome: Outcome::NotAttending,
      subject: "Kiitos vastauksestasi",
      body:    fi_not_attending,
    },
  ],
  [
    Template {
      locale:  Locale::En,
      outcome: Outcome::Attending,
      subject: "We'll see you there!",
      body:    en_attending,
    },
    Template {
      locale:  Locale::En,
      outcome: Outcome::NotAttending,
      subject: "Thanks for letting us know",
      body:    en_not_attending,
    },
  ],
];

pub fn template(locale: Locale, outcome: Outcome) -> &'static Template {
  &TEMPLATES[locale as usize][outcome as usize]
}

// ─── Swedish ─────────────────────────────────────────────────────────────────

fn sv_attending(args: &TemplateArgs<'_>) -> String {
  let party = match args.guest_count {
    1 => "1 gäst".to_owned(),
    n => format!("{n} gäster"),
  };
  format!(
    "Hej {name}!\n\n\
     Tack för ditt svar. Vi har noterat {party}.\n\
     {message}\n\
     Vi ser fram emot att fira med dig!\n",
    name = args.name,
    message = quoted(args.message, "Ditt meddelande till oss"),
  )
}

fn sv_not_attending(args: &TemplateArgs<'_>) -> String {
  format!(
    "Hej {name}!\n\n\
     Tack för ditt svar. Tråkigt att du inte kan komma, vi kommer att sakna dig!\n\
     {message}\n\
     Varma hälsningar\n",
    name = args.name,
    message = quoted(args.message, "Ditt meddelande till oss"),
  )
}

// ─── Finnish ─────────────────────────────────────────────────────────────────

fn fi_attending(args: &TemplateArgs<'_>) -> String {
  // numerals above one take the partitive
  let party = match args.guest_count {
    1 => "1 vieras".to_owned(),
    n => format!("{n} vierasta"),
  };
  format!(
    "Hei {name}!\n\n\
     Kiitos ilmoittautumisestasi. Olemme merkinneet ylös {party}.\n\
     {message}\n\
     Odotamme innolla, että pääsemme juhlimaan kanssasi!\n",
    name = args.name,
    message = quoted(args.message, "Viestisi meille"),
  )
}

fn fi_not_attending(args: &TemplateArgs<'_>) -> String {
  format!(
    "Hei {name}!\n\n\
     Kiitos, että ilmoitit meille. Harmi, ettet pääse paikalle, sinua tullaan kaipaamaan!\n\
     {message}\n\
     Lämpimin terveisin\n",
    name = args.name,
    message = quoted(args.message, "Viestisi meille"),
  )
}

// ─── English ─────────────────────────────────────────────────────────────────

fn en_attending(args: &TemplateArgs<'_>) -> String {
  let party = match args.guest_count {
    1 => "1 guest".to_owned(),
    n => format!("{n} guests"),
  };
  format!(
    "Hi {name},\n\n\
     Thank you for your RSVP. We have you down for {party}.\n\
     {message}\n\
     We can't wait to celebrate with you!\n",
    name = args.name,
    message = quoted(args.message, "Your message to us"),
  )
}

fn en_not_attending(args: &TemplateArgs<'_>) -> String {
  format!(
    "Hi {name},\n\n\
     Thank you for your reply. We're sorry you can't make it, and we'll miss you!\n\
     {message}\n\
     Warm regards\n",
    name = args.name,
    message = quoted(args.message, "Your message to us"),
  )
}

/// `\n<label>:\n"<message>"\n`, or nothing.
fn quoted(message: Option<&str>, label: &str) -> String {
  match message {
    Some(m) => format!("\n{label}:\n\"{m}\"\n"),
    None => String::new(),
  }
}
