//! Runner configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `WIZARDRY_LEVEL` | built-in map | path to a JSON level file |
//! | `WIZARDRY_FRAME_MS` | 50 | tick pacing in milliseconds |
//! | `WIZARDRY_LOG_PATH` | none | append log records to this file |
//! | `WIZARDRY_SMOOTH_ROTATION` | off | scale turns by delta-time |
//!
//! Log filtering itself follows `RUST_LOG` (default `info`).

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::core::{Level, LevelDef, RotationPacing};
use crate::types::FRAME_MS;

/// Pacing outside this range is clamped
const FRAME_MS_RANGE: (u64, u64) = (10, 1000);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub level_path: Option<PathBuf>,
    pub frame_ms: u64,
    pub log_path: Option<PathBuf>,
    pub rotation_pacing: RotationPacing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level_path: None,
            frame_ms: FRAME_MS as u64,
            log_path: None,
            rotation_pacing: RotationPacing::PerTick,
        }
    }
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(non_empty)
    }

    /// Build from any variable lookup (tests pass a map instead of the process env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let frame_ms = lookup("WIZARDRY_FRAME_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(|ms| ms.clamp(FRAME_MS_RANGE.0, FRAME_MS_RANGE.1))
            .unwrap_or(FRAME_MS as u64);

        let rotation_pacing = match lookup("WIZARDRY_SMOOTH_ROTATION") {
            Some(s) if parse_flag(&s) => RotationPacing::DeltaTime,
            _ => RotationPacing::PerTick,
        };

        Self {
            level_path: lookup("WIZARDRY_LEVEL").map(PathBuf::from),
            frame_ms,
            log_path: lookup("WIZARDRY_LOG_PATH").map(PathBuf::from),
            rotation_pacing,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// The configured level file, or the built-in map
    pub fn load_level(&self) -> Result<Level> {
        match &self.level_path {
            Some(path) => LevelDef::load(path)?.build(),
            None => Ok(Level::builtin()),
        }
    }

    /// Route `log` records to the log file, if one is configured.
    ///
    /// Without a file nothing is installed; the terminal belongs to the view.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format_timestamp_millis()
            .try_init()
            .context("logger already initialised")?;
        Ok(())
    }
}
