//! Log setup: console stream plus an overwrite-on-start log file.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// The file at `path` is truncated on every start; history belongs to the
/// previous run. `log` macro calls from the rest of the crate are bridged
/// into the same subscriber. Level filtering follows `RUST_LOG`, defaulting
/// to `info`.
pub fn init(path: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
