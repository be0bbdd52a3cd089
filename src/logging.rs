//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file only.
//! The filter comes from `MEDICARE_LOG`, then the config `log_level`,
//! then `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MEDICARE_LOG";

pub fn build_filter(config_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .ok()
        .or_else(|| config_level.and_then(|level| EnvFilter::try_new(level).ok()))
        .unwrap_or_else(|| EnvFilter::new("info"))
}

pub fn init(path: &Path, config_level: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing tracing subscriber: {err}"))?;
    Ok(())
}
