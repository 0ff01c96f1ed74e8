use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for a loaded page configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,
    #[error("scroll threshold must be finite, got {value}")]
    NonFiniteThreshold { value: f64 },
    #[error("countdown entry {index} has an empty label")]
    EmptyLabel { index: usize },
}

/// One configured countdown: a display label and the raw target date/time
/// string, in any of the formats the flexible parser accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownEntry {
    pub label: String,
    #[serde(default)]
    pub target: String,
}

/// Configuration for the page engine, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Nominal refresh period for countdown panels, in milliseconds.
    pub tick_period_ms: u64,
    /// Scroll offset past which the body gains the scrolled flag.
    pub scrolled_threshold: f64,
    /// Scroll offset past which the header background changes.
    pub header_threshold: f64,
    pub countdowns: Vec<CountdownEntry>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 1_000,
            scrolled_threshold: 100.0,
            header_threshold: 10.0,
            countdowns: Vec::new(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        for value in [self.scrolled_threshold, self.header_threshold] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteThreshold { value });
            }
        }
        for (index, entry) in self.countdowns.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
        }
        Ok(())
    }
}
