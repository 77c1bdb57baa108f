//! Diagnostic logging to disk.
//!
//! The terminal belongs to the kiosk UI, so `tracing` output goes to
//! `<log_dir>/borne.log` instead of stderr. Nothing is installed when logging
//! is disabled and the `tracing` macros become no-ops.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

const LOG_FILE: &str = "borne.log";

/// Expand a leading `~` to the home directory.
pub fn resolve_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    PathBuf::from(log_dir)
}

/// Unknown level names fall back to `info`.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

/// Install the global file subscriber. Returns the log file path when
/// logging is enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let dir = resolve_log_dir(&config.log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("loud"), Level::INFO);
    }

    #[test]
    fn test_resolve_log_dir() {
        assert_eq!(resolve_log_dir("/var/log/borne"), PathBuf::from("/var/log/borne"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_log_dir("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let cfg = LoggingConfig::default();
        assert!(init(&cfg).unwrap().is_none());
    }
}
