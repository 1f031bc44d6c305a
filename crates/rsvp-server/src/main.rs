//! rsvp-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the RSVP API over HTTP.
//!
//! # Password hash generation
//!
//! To generate the argon2 PHC string for `admin.password_hash`:
//!
//! ```
//! cargo run -p rsvp-server -- --hash-password
//! ```

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use clap::Parser;
use rand_core::OsRng;
use rsvp_api::ApiState;
use rsvp_mail::Outbox;
use rsvp_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "RSVP server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print the argon2 hash for a password entered on stdin and exit.
  #[arg(long)]
  hash_password: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if cli.hash_password {
    let password = read_password()?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?
      .to_string();
    println!("{hash}");
    return Ok(());
  }

  let cfg = settings::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store_path = settings::expand_tilde(&cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let mailer = Outbox::from_config(cfg.mail.as_ref()).context("invalid [mail] configuration")?;
  if !mailer.is_enabled() {
    tracing::warn!("no [mail] section; confirmation emails are disabled");
  }
  if cfg.admin.is_none() {
    tracing::warn!("no [admin] section; GET /rsvp is open to anyone");
  }

  let state = ApiState {
    store:    Arc::new(store),
    mailer:   Arc::new(mailer),
    capacity: cfg.capacity,
    admin:    cfg.admin.map(Arc::new),
  };

  let app = rsvp_api::router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!(capacity = cfg.capacity, store = ?store_path, "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}

/// Read a password from stdin.
fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
