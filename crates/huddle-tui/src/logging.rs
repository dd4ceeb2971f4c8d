//! File-targeted tracing setup.
//!
//! The TUI owns the terminal's alternate screen, so log output goes to a
//! file instead of stderr. Filtering follows `RUST_LOG` when set.

use anyhow::Context as _;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub(crate) fn init(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("huddle_core=debug,huddle_tui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!("logging initialized");
    Ok(())
}
