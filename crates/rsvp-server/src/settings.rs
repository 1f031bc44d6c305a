//! Runtime configuration: an optional TOML file layered under `RSVP_*`
//! environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use rsvp_api::AdminCredentials;
use rsvp_core::service::DEFAULT_CAPACITY;
use rsvp_mail::SmtpConfig;
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  #[serde(default = "default_capacity")]
  pub capacity:   u32,
  /// Absent leaves the dashboard endpoints open.
  #[serde(default)]
  pub admin:      Option<AdminCredentials>,
  /// Absent disables confirmation mail.
  #[serde(default)]
  pub mail:       Option<SmtpConfig>,
}

fn default_host() -> String { "127.0.0.1".into() }

fn default_port() -> u16 { 3000 }

fn default_store_path() -> PathBuf { PathBuf::from("rsvp.sqlite3") }

fn default_capacity() -> u32 { DEFAULT_CAPACITY }

/// Read `path` if it exists, then apply `RSVP_*` overrides, e.g.
/// `RSVP_PORT=8080` or `RSVP_MAIL__SMTP_HOST=smtp.example.com`.
pub fn load(path: &Path) -> Result<ServerConfig, ConfigError> {
  layered(Config::builder().add_source(File::from(path).required(false)))
}

fn layered(
  builder: config::ConfigBuilder<DefaultState>,
) -> Result<ServerConfig, ConfigError> {
  builder
    .add_source(
      Environment::with_prefix("RSVP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
