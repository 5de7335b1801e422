//! # Slot Logger
//!
//! An in-process logging facility built around a fixed-capacity table of
//! appenders. Each appender has its own enable flag, threshold and formatting
//! options; one synchronous write path renders an entry per appender and fans
//! it out.
//!
//! ## Features
//!
//! - **Bounded**: fixed number of appender slots, bounded message and entry sizes
//! - **Per-appender control**: threshold, timestamp, level tag, location, function, color
//! - **Predictable handles**: freed slots are reused lowest index first
//! - **Thread Safe**: `Logger` is `Send + Sync`, with an optional external lock hook
//!
//! ```
//! use slot_logger::prelude::*;
//! use slot_logger::warn;
//!
//! let logger = Logger::new();
//! let (appender, rx) = ChannelAppender::with_receiver(None);
//! let id = logger.register_appender(appender, None).unwrap();
//! logger.set_appender_level(id, LogLevel::Warn).unwrap();
//!
//! logger.info("not delivered");
//! warn!(logger, "disk at {}%", 91);
//! assert_eq!(rx.try_recv().unwrap(), "[WARN ] disk at 91%\n");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::appenders::{ChannelAppender, StreamAppender};
    pub use crate::core::{
        Appender, AppenderId, ErrorCode, FnAppender, FnLockHook, FormatOption, FormatOptions,
        LockHook, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        MutexLockHook, Result, SourceLocation, UserContext,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use appenders::{ChannelAppender, StreamAppender};
pub use core::{
    Appender, AppenderId, BoundedString, ErrorCode, FnAppender, FnLockHook, FormatOption,
    FormatOptions, LockHook, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, MutexLockHook, Result, SourceLocation, UserContext, DEFAULT_TIME_FORMAT,
};
