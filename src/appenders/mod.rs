//! Appender implementations

pub mod channel;
#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod stream;

pub use channel::ChannelAppender;
#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use file::FileAppender;
pub use stream::StreamAppender;

// Re-export traits for convenience
pub use crate::core::{Appender, FnAppender};
