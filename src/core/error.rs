//! Error types for the logger system

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Registration attempted with every slot occupied
    #[error("Maximum number of appenders reached ({capacity})")]
    MaxAppendersReached { capacity: usize },

    /// Level, option or configuration value outside its valid range
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// Handle refers to an empty or out-of-range slot
    #[error("Invalid appender handle: {id}")]
    InvalidHandle { id: usize },

    /// Write attempted while the logger is globally disabled
    #[error("Logger is not enabled")]
    NotEnabled,

    /// At least one appender failed during a single dispatch
    #[error("{failed} of {attempted} appenders failed")]
    AppenderFailed { failed: usize, attempted: usize },

    /// Internal contract violation
    #[error("Internal logger error: {0}")]
    Unknown(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },

    /// Channel send error
    #[error("Failed to send log entry to channel")]
    ChannelSendError,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

/// Flat result code for every logger outcome
///
/// Useful when the outcome has to cross a boundary that only understands
/// small integers, or for quick matching in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok = 0,
    MaxAppendersReached,
    InvalidArgument,
    InvalidHandle,
    NotEnabled,
    AppenderFailed,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Ok => "OK",
            ErrorCode::MaxAppendersReached => "Max appenders reached",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::InvalidHandle => "Invalid handle",
            ErrorCode::NotEnabled => "Not enabled",
            ErrorCode::AppenderFailed => "Appender failed",
            ErrorCode::Unknown => "Unknown",
        }
    }

    /// Code for the outcome of any logger call
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Ok,
            Err(e) => e.code(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LoggerError {
    /// Map this error to its flat result code
    ///
    /// IO, lock, channel and writer failures all surface from appenders, so
    /// they map to `AppenderFailed`; configuration problems are argument
    /// errors.
    pub fn code(&self) -> ErrorCode {
        match self {
            LoggerError::MaxAppendersReached { .. } => ErrorCode::MaxAppendersReached,
            LoggerError::InvalidArgument { .. }
            | LoggerError::InvalidConfiguration { .. }
            | LoggerError::JsonError(_) => ErrorCode::InvalidArgument,
            LoggerError::InvalidHandle { .. } => ErrorCode::InvalidHandle,
            LoggerError::NotEnabled => ErrorCode::NotEnabled,
            LoggerError::AppenderFailed { .. }
            | LoggerError::IoError(_)
            | LoggerError::FileLockError { .. }
            | LoggerError::ChannelSendError
            | LoggerError::WriterError(_) => ErrorCode::AppenderFailed,
            LoggerError::Unknown(_) => ErrorCode::Unknown,
        }
    }

    /// Create a max appenders error
    pub fn max_appenders(capacity: usize) -> Self {
        LoggerError::MaxAppendersReached { capacity }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid handle error
    pub fn invalid_handle(id: usize) -> Self {
        LoggerError::InvalidHandle { id }
    }

    /// Create an aggregated appender failure
    pub fn appender_failed(failed: usize, attempted: usize) -> Self {
        LoggerError::AppenderFailed { failed, attempted }
    }

    /// Create an internal contract violation error
    pub fn unknown<S: Into<String>>(msg: S) -> Self {
        LoggerError::Unknown(msg.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
