//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::constants::defaults;
use crate::error::{Error, Result};
use crate::types::{Activity, Height};

/// Heights like `5'10"`, `5'10`, `5 10`, `5ft 10in` or just `6'`.
#[allow(clippy::expect_used)]
static RE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\d+)\s*(?:'|ft|\s)\s*(?:(\d+)\s*(?:"|in)?)?\s*$"#).expect("valid regex: RE_HEIGHT")
});

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Height pre-filled in forms and used when height fields are blank
    pub default_height: Height,
    /// Activity pre-selected in forms
    pub default_activity: Activity,
    /// Directory for the log file
    pub log_dir: PathBuf,
    /// `tracing` filter directive, e.g. `info` or `stride=debug`
    pub log_filter: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            default_height: Height::default(),
            default_activity: Activity::default(),
            log_dir: default_log_dir(),
            log_filter: defaults::LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load a specific .env file into the environment, then read configuration
    /// from it. Variables already set in the environment take precedence.
    pub fn load_from(path: &Path) -> Result<Self> {
        dotenv::from_path(path).map_err(|e| {
            Error::config(
                format!("cannot load {}: {e}", path.display()),
                "Check the file exists and uses KEY=value lines",
            )
        })?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a key lookup, applying defaults for absent keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(height) = lookup("STRIDE_DEFAULT_HEIGHT") {
            config.default_height = parse_height(&height)?;
        }

        if let Some(activity) = lookup("STRIDE_DEFAULT_ACTIVITY") {
            config.default_activity = activity.parse().map_err(|_| {
                Error::config(
                    format!("STRIDE_DEFAULT_ACTIVITY has unknown activity {activity:?}"),
                    "Use walking or running",
                )
            })?;
        }

        if let Some(dir) = lookup("STRIDE_LOG_DIR") {
            config.log_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        }

        if let Some(filter) = lookup("STRIDE_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// Parse a height such as `5'10"` into feet and inches.
pub fn parse_height(text: &str) -> Result<Height> {
    const HINT: &str = "Use feet and inches like 5'10\"";

    let caps = RE_HEIGHT
        .captures(text)
        .ok_or_else(|| Error::config(format!("unrecognized height {text:?}"), HINT))?;
    let number = |i: usize| -> Result<u32> {
        caps.get(i).map_or(Ok(0), |m| {
            m.as_str()
                .parse()
                .map_err(|_| Error::config(format!("height part {:?} is too large", m.as_str()), HINT))
        })
    };
    let (feet, inches) = (number(1)?, number(2)?);

    if feet == 0 || inches >= 12 {
        return Err(Error::config(format!("height {text:?} is out of range"), HINT));
    }
    Ok(Height::new(feet, inches))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join(env!("CARGO_PKG_NAME"))
}
