//! Process configuration read from the environment.
//!
//! | Variable         | Meaning                                              |
//! |------------------|------------------------------------------------------|
//! | `CHASE_SEED`     | Pellet seed (u64). Clock-derived when unset/invalid. |
//! | `CHASE_LOG_PATH` | Append log records to this file.                     |
//! | `RUST_LOG`       | Log filter, only consulted when a log file is set.   |
//!
//! The game owns the terminal in raw mode, so logging goes to a file or
//! nowhere.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("CHASE_SEED").and_then(|v| v.trim().parse::<u64>().ok());
        let log_path = lookup("CHASE_LOG_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { seed, log_path }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Install the global logger if a log file is configured.
///
/// Without `CHASE_LOG_PATH` no logger is installed and every log call is a
/// no-op. With it, the filter defaults to `info`.
pub fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}
