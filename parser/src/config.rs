//! Parser configuration.
//!
//! Loaded from YAML. Only the clock is configurable: lesson validation can
//! read the system time for every command (the default), freeze it once when
//! the parser is built, or use a fixed reading.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! clock:
//!   mode: fixed
//!   fixed_at: "2025-04-01T08:00:00"
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::{Clock, FixedClock, SystemClock};

/// Errors that can occur while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// `mode: fixed` without a `fixed_at` reading.
    #[error("clock mode 'fixed' requires 'fixed_at'")]
    MissingFixedTime,
}

/// When the parser samples the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    /// Read the system clock once for every parsed command.
    #[default]
    PerCall,
    /// Read the system clock once when the clock is built and reuse that
    /// reading for the life of the process.
    Startup,
    /// Use `fixed_at` for every command.
    Fixed,
}

/// Clock settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default)]
    pub mode: ClockMode,
    /// Reading used by [`ClockMode::Fixed`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_at: Option<NaiveDateTime>,
}

/// Top-level parser configuration.
///
/// # Examples
///
/// ```
/// use tutorbook_parser::config::{ClockMode, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert_eq!(config.clock.mode, ClockMode::PerCall);
/// assert!(config.clock().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            clock: ClockConfig::default(),
        }
    }
}

impl ParserConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read, or
    /// [`ConfigError::YamlError`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Pins the clock to `at`, overriding the configured mode.
    pub fn with_fixed_time(mut self, at: NaiveDateTime) -> Self {
        self.clock = ClockConfig {
            mode: ClockMode::Fixed,
            fixed_at: Some(at),
        };
        self
    }

    /// Builds the configured clock.
    pub fn clock(&self) -> Result<Box<dyn Clock>, ConfigError> {
        match self.clock.mode {
            ClockMode::PerCall => Ok(Box::new(SystemClock)),
            ClockMode::Startup => Ok(Box::new(FixedClock::snapshot(&SystemClock))),
            ClockMode::Fixed => {
                let at = self.clock.fixed_at.ok_or(ConfigError::MissingFixedTime)?;
                Ok(Box::new(FixedClock::new(at)))
            }
        }
    }
}
