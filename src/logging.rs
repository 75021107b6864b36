//! Logging setup.
//!
//! The TUI owns stdout, so events go to a plain-text file in the configured
//! log directory, filtered by an `EnvFilter` directive.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::constants::defaults::{LOG_FILE_NAME, LOG_FILTER};
use crate::error::{Error, Result};

/// Path of the log file for a configuration.
pub fn log_file_path(config: &Config) -> PathBuf {
    config.log_dir.join(LOG_FILE_NAME)
}

/// Filter from the configured directive, falling back to the default level.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(LOG_FILTER))
}

/// Install the global subscriber writing to the log file. Returns the file path.
pub fn init(config: &Config) -> Result<PathBuf> {
    fs::create_dir_all(&config.log_dir).map_err(|e| Error::io(e, config.log_dir.clone()))?;

    let path = log_file_path(config);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| Error::io(e, path.clone()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_filter))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Msg(format!("Failed to install log subscriber: {e}")))?;

    tracing::info!(
        "{} {} logging to {}",
        config.app_name(),
        config.app_version(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn log_file_lives_in_log_dir() {
        let mut config = Config::default();
        config.log_dir = PathBuf::from("/var/tmp/stride");
        assert_eq!(log_file_path(&config), PathBuf::from("/var/tmp/stride/stride.log"));
    }

    #[test]
    fn init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.log_dir = dir.path().join("logs");
        // Another test may already own the global subscriber; the file is created either way.
        let _ = init(&config);
        assert!(log_file_path(&config).exists());
    }
}
