//! Configuration management for coursify
//!
//! Settings are loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `COURSIFY_LOG_LEVEL`: Logging level - default: "info"
//! - `COURSIFY_STYLESHEETS`: Comma-separated stylesheet names probed inside a
//!   template directory, in order - default: "style.css,styles.css,css/style.css,css/styles.css,main.css"
//! - `COURSIFY_MAX_STYLESHEET_SIZE`: Largest stylesheet read, in bytes - default: "5242880" (5MB)
//!
//! # Example
//!
//! ```no_run
//! use coursify::CoursifyConfig;
//!
//! let config = CoursifyConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_STYLESHEETS: &[&str] = &[
    "style.css",
    "styles.css",
    "css/style.css",
    "css/styles.css",
    "main.css",
];
const DEFAULT_MAX_STYLESHEET_SIZE: u64 = 5_242_880; // 5MB
const MAX_STYLESHEET_SIZE_LIMIT: u64 = 67_108_864; // 64MB

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Main configuration structure for coursify
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursifyConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Stylesheet names probed relative to the template directory
    pub stylesheet_candidates: Vec<String>,

    /// Maximum stylesheet size in bytes
    pub max_stylesheet_size: u64,
}

impl Default for CoursifyConfig {
    /// Creates a new configuration by loading from environment variables with defaults
    fn default() -> Self {
        let log_level = env::var("COURSIFY_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let stylesheet_candidates = env::var("COURSIFY_STYLESHEETS")
            .ok()
            .map(|v| parse_candidates(&v))
            .unwrap_or_else(|| DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect());

        let max_stylesheet_size = env::var("COURSIFY_MAX_STYLESHEET_SIZE")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MAX_STYLESHEET_SIZE);

        Self {
            log_level,
            stylesheet_candidates,
            max_stylesheet_size,
        }
    }
}

fn parse_candidates(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl CoursifyConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the log level is unknown, no stylesheet
    /// candidates are configured, or the size limit is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.stylesheet_candidates.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "At least one stylesheet candidate is required".to_string(),
            ));
        }

        if self.max_stylesheet_size == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max stylesheet size must be at least 1 byte".to_string(),
            ));
        }
        if self.max_stylesheet_size > MAX_STYLESHEET_SIZE_LIMIT {
            return Err(ConfigError::ValidationFailed(
                "Max stylesheet size cannot exceed 64MB".to_string(),
            ));
        }

        Ok(())
    }

    /// Converts configuration to a display map for output formatting
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();

        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert(
            "stylesheet_candidates".to_string(),
            self.stylesheet_candidates.join(","),
        );
        map.insert(
            "max_stylesheet_size".to_string(),
            self.max_stylesheet_size.to_string(),
        );

        map
    }
}

impl fmt::Display for CoursifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coursify Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(
            f,
            "  Stylesheet Candidates: {}",
            self.stylesheet_candidates.join(", ")
        )?;
        writeln!(f, "  Max Stylesheet Size: {} bytes", self.max_stylesheet_size)?;
        Ok(())
    }
}
