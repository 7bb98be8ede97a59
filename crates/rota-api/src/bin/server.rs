//! rota server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-memory roster store, and serves the JSON API over HTTP. Pass `--seed`
//! (or set `seed_sample_data = true`) to start with demo volunteers and
//! shifts for January 2026.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::Parser;
use rota_core::{
  shift::{Shift, ShiftCategory},
  store::RosterStore,
  volunteer::Volunteer,
};
use rota_store_memory::MemoryStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROTA_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host: String,
  #[serde(default = "default_port")]
  port: u16,
  /// Populate the store with demo data on startup.
  #[serde(default)]
  seed_sample_data: bool,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8080
}

#[derive(Parser)]
#[command(author, version, about = "Rota volunteer shift server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Seed demo data regardless of the config file setting.
  #[arg(long)]
  seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ROTA"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = Arc::new(MemoryStore::new());
  if cli.seed || server_cfg.seed_sample_data {
    seed_sample_data(store.as_ref()).await?;
    tracing::info!("seeded sample volunteers and shifts");
  }

  let app = rota_api::api_router(store).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Demo fixture: three volunteers and five shifts in January 2026.
async fn seed_sample_data(store: &MemoryStore) -> anyhow::Result<()> {
  for (name, phone, email) in [
    ("Alice Johnson", "+1234567890", "alice@example.com"),
    ("Bob Smith", "+1987654321", "bob@example.com"),
    ("Carol White", "+1555555555", "carol@example.com"),
  ] {
    let volunteer = Volunteer::new(Uuid::new_v4(), name, phone, email)?;
    store.add_volunteer(volunteer).await?;
  }

  for (day, category, capacity, start, end) in [
    (5, ShiftCategory::EarlyMorning, 1, "06:00", "08:00"),
    (12, ShiftCategory::EarlyMorning, 1, "06:00", "08:00"),
    (10, ShiftCategory::General, 4, "08:00", "17:00"),
    (15, ShiftCategory::General, 4, "08:00", "17:00"),
    (22, ShiftCategory::General, 4, "08:00", "17:00"),
  ] {
    let date = NaiveDate::from_ymd_opt(2026, 1, day).context("invalid fixture date")?;
    let shift = Shift::new(Uuid::new_v4(), date, category, capacity, start, end)?;
    store.add_shift(shift).await?;
  }

  Ok(())
}
