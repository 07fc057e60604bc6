//! `maple-contact`: send a message through the Maple Properties contact
//! form from the terminal.
//!
//! # Usage
//!
//! ```
//! maple-contact --name Jo --email jo@example.com --message "Hi"
//! maple-contact --url https://mapleproperties.co.uk --name Jo ...
//! maple-contact --config ~/.config/maple/client.toml --name Jo ...
//! ```

mod client;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use client::HttpTransport;
use maple_core::{FieldName, FormState, Status};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:3000";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "maple-contact", about = "Send a message to Maple Properties")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the site (default: http://localhost:3000).
  #[arg(long, env = "MAPLE_URL")]
  url: Option<String>,

  #[arg(long, default_value = "")]
  name: String,

  #[arg(long, default_value = "")]
  email: String,

  #[arg(long, default_value = "")]
  phone: String,

  /// Address of the property you'd like to discuss.
  #[arg(long, default_value = "")]
  address: String,

  #[arg(long, default_value = "")]
  message: String,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag / env override config file, which overrides the default.
  let base_url = args
    .url
    .clone()
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| DEFAULT_URL.to_string());

  let transport = HttpTransport::new(base_url)?;

  let mut form = FormState::new();
  form.set_field(FieldName::Name, args.name);
  form.set_field(FieldName::Email, args.email);
  form.set_field(FieldName::Phone, args.phone);
  form.set_field(FieldName::Address, args.address);
  form.set_field(FieldName::Message, args.message);

  form.submit(&transport).await;
  println!("{}", form.status_message());

  Ok(match form.status {
    Status::Sent(_) => ExitCode::SUCCESS,
    _ => ExitCode::FAILURE,
  })
}
