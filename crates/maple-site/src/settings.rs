//! Runtime configuration: built-in defaults, then an optional TOML file,
//! then `MAPLE_*` environment variables.

use std::{path::{Path, PathBuf}, time::Duration};

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::error::Error;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
  pub host:              String,
  pub port:              u16,
  /// Directory served for any path no route claims (images, icons).
  pub public_dir:        PathBuf,
  /// Artificial pause before a successful contact reply.
  pub response_delay_ms: u64,
}

impl SiteConfig {
  /// Load from `path` (skipped if absent) and the environment.
  pub fn load(path: &Path) -> Result<Self, Error> {
    let settings = defaults()?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("MAPLE"))
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  pub fn response_delay(&self) -> Duration {
    Duration::from_millis(self.response_delay_ms)
  }
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      host:              "127.0.0.1".to_string(),
      port:              3000,
      public_dir:        PathBuf::from("public"),
      response_delay_ms: 1000,
    }
  }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, Error> {
  let d = SiteConfig::default();
  Ok(
    Config::builder()
      .set_default("host", d.host)?
      .set_default("port", i64::from(d.port))?
      .set_default("public_dir", d.public_dir.to_string_lossy().into_owned())?
      .set_default("response_delay_ms", d.response_delay_ms)?,
  )
}
