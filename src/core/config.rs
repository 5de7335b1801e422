//! Logger configuration
//!
//! [`LoggerConfig`] fixes the sizes that cannot change after construction
//! (slot capacity, buffer capacities) along with the initial global state.
//! It can be built in code or loaded from JSON.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::{DEFAULT_TIME_FORMAT, MAX_TIME_FORMAT_LEN};
use serde::{Deserialize, Serialize};

/// Default number of appender slots
pub const DEFAULT_CAPACITY: usize = 16;

/// Default bound on a rendered message body
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 1024;

/// Default bound on a fully rendered entry
pub const DEFAULT_MAX_ENTRY_LEN: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Maximum number of simultaneously registered appenders
    pub capacity: usize,
    /// Message bodies longer than this are truncated
    pub max_message_len: usize,
    /// Rendered entries, newline included, never exceed this
    pub max_entry_len: usize,
    /// Global threshold
    pub level: LogLevel,
    /// Threshold given to appenders registered without one
    pub default_appender_level: LogLevel,
    /// strftime pattern used when an appender has none
    pub time_format: String,
    /// Initial global enabled flag
    pub enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            level: LogLevel::Info,
            default_appender_level: LogLevel::Info,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            enabled: true,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document; missing fields take defaults
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_logger::{LoggerConfig, LogLevel};
    ///
    /// let config = LoggerConfig::from_json_str(r#"{"capacity": 8, "level": "Debug"}"#).unwrap();
    /// assert_eq!(config.capacity, 8);
    /// assert_eq!(config.level, LogLevel::Debug);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(LoggerError::config("LoggerConfig", "capacity must be non-zero"));
        }
        if self.max_message_len == 0 {
            return Err(LoggerError::config("LoggerConfig", "max_message_len must be non-zero"));
        }
        if self.max_entry_len <= self.max_message_len {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!(
                    "max_entry_len ({}) must exceed max_message_len ({})",
                    self.max_entry_len, self.max_message_len
                ),
            ));
        }
        if self.time_format.len() > MAX_TIME_FORMAT_LEN {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("time_format longer than {} bytes", MAX_TIME_FORMAT_LEN),
            ));
        }
        Ok(())
    }
}
