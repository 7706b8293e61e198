//! Moderation settings loaded from rewear.toml
//!
//! The file is optional when using the default location; an explicitly
//! configured path (via `REWEAR_CONFIG`) must exist and parse.
//!
//! ```toml
//! [moderation]
//! page_size = 10
//! notice_duration_secs = 3
//! ```

use crate::{
    core::{notice::DEFAULT_NOTICE_DURATION, query::DEFAULT_PAGE_SIZE},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "REWEAR_CONFIG";
/// Config file looked up in the working directory when the variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "rewear.toml";

/// Configuration structure representing the entire rewear.toml file
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Admin panel moderation settings
    #[serde(default)]
    pub moderation: ModerationConfig,
}

/// The `[moderation]` table
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ModerationConfig {
    /// Rows per page in the moderation tables
    pub page_size: usize,
    /// Seconds a confirmation notice stays visible
    pub notice_duration_secs: u64,
}

impl ModerationConfig {
    /// Notice display duration as a [`Duration`]
    #[must_use]
    pub const fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_duration_secs)
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            notice_duration_secs: DEFAULT_NOTICE_DURATION.as_secs(),
        }
    }
}

/// Parses and validates configuration text.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is invalid or `page_size` is zero.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse rewear.toml: {e}"),
    })?;

    if config.moderation.page_size == 0 {
        return Err(Error::Config {
            message: "moderation.page_size must be at least 1".to_string(),
        });
    }
    Ok(config)
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A value is out of range
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    debug!("Loading configuration from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads configuration from `$REWEAR_CONFIG`, else `./rewear.toml`, else defaults.
///
/// # Errors
/// Returns an error if the chosen file exists but is invalid, or if
/// `$REWEAR_CONFIG` names a file that cannot be read.
pub fn load_app_config() -> Result<Config> {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return load_config(default_path);
    }

    info!("No {} found, using default settings", DEFAULT_CONFIG_PATH);
    Ok(Config::default())
}
