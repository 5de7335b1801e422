//! Appender trait for log output destinations

use super::error::{LoggerError, Result};
use std::any::Any;
use std::sync::Arc;

/// Caller-owned value handed to an appender on every call
///
/// The registry stores and passes it through; it never inspects it.
pub type UserContext = Arc<dyn Any + Send + Sync>;

pub trait Appender: Send {
    /// Write one rendered, newline-terminated entry
    fn append(&mut self, entry: &str, context: Option<&UserContext>) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Appender backed by a closure
///
/// The closure returns `false` to signal that the entry was not written.
///
/// # Examples
///
/// ```
/// use slot_logger::{FnAppender, Logger};
///
/// let logger = Logger::new();
/// let id = logger
///     .register_appender(FnAppender::new(|entry, _ctx| {
///         print!("{}", entry);
///         true
///     }), None)
///     .unwrap();
/// assert_eq!(id.index(), 0);
/// ```
pub struct FnAppender<F> {
    name: String,
    sink: F,
}

impl<F> FnAppender<F>
where
    F: FnMut(&str, Option<&UserContext>) -> bool + Send,
{
    pub fn new(sink: F) -> Self {
        Self {
            name: "fn".to_string(),
            sink,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<F> Appender for FnAppender<F>
where
    F: FnMut(&str, Option<&UserContext>) -> bool + Send,
{
    fn append(&mut self, entry: &str, context: Option<&UserContext>) -> Result<()> {
        if (self.sink)(entry, context) {
            Ok(())
        } else {
            Err(LoggerError::writer(format!("appender '{}' rejected entry", self.name)))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
