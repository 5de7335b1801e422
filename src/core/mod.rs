//! Core logger types and traits

pub mod appender;
pub mod bounded;
pub mod config;
pub mod error;
pub mod formatter;
pub mod lock_hook;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod slot_table;
pub mod timestamp;

pub use appender::{Appender, FnAppender, UserContext};
pub use bounded::BoundedString;
pub use config::LoggerConfig;
pub use error::{ErrorCode, LoggerError, Result};
pub use formatter::{render_entry, FormatOption, FormatOptions};
pub use lock_hook::{FnLockHook, HookGuard, LockHook, MutexLockHook};
pub use log_entry::{LogEntry, SourceLocation};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use slot_table::{AppenderId, SlotTable};
pub use timestamp::DEFAULT_TIME_FORMAT;
