//! `paycalc.toml` settings.
//!
//! ```toml
//! default_country = "IN"
//! rates_file = "rates.csv"
//! cache_ttl_hours = 24
//! log_level = "info"
//! log_file = "paycalc.log"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.
//!
//! `cache_ttl_hours` sets the lifetime of the rate service's in-memory
//! cache. The CLI builds one service per invocation and looks rates up once,
//! so the key only takes effect when the service is reused in one process.

use std::path::{Path, PathBuf};

use chrono::Duration;
use paycalc_core::CountryCode;
use paycalc_rates::DEFAULT_TTL_HOURS;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "paycalc.toml";

/// Longest accepted `cache_ttl_hours`, one year.
pub const MAX_CACHE_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_country: Option<String>,
    /// JSON provider payload or `currency,rate` CSV, quoted against USD.
    pub rates_file: Option<PathBuf>,
    /// In-memory rate cache lifetime, `1..=MAX_CACHE_TTL_HOURS`.
    pub cache_ttl_hours: i64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_country: None,
            rates_file: None,
            cache_ttl_hours: DEFAULT_TTL_HOURS,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads `path`, or `paycalc.toml` from the working directory when no
    /// path is given.
    ///
    /// An explicit path must exist; a missing default file yields the
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The rate cache lifetime as a [`Duration`].
    pub fn cache_ttl(&self) -> Result<Duration, ConfigError> {
        if !(1..=MAX_CACHE_TTL_HOURS).contains(&self.cache_ttl_hours) {
            return Err(ConfigError::Validation(format!(
                "cache_ttl_hours must be between 1 and {MAX_CACHE_TTL_HOURS}, got {}",
                self.cache_ttl_hours
            )));
        }
        Duration::try_hours(self.cache_ttl_hours).ok_or_else(|| {
            ConfigError::Validation(format!(
                "cache_ttl_hours out of range: {}",
                self.cache_ttl_hours
            ))
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.cache_ttl()?;

        if let Some(code) = &self.default_country {
            if CountryCode::parse(code).is_none() {
                return Err(ConfigError::Validation(format!(
                    "unknown default_country '{code}'"
                )));
            }
        }

        Ok(())
    }
}
