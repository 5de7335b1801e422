//! Appender over any `Write` implementation

use crate::core::{Appender, Result, UserContext};
use std::io::Write;

/// Writes entries to an arbitrary byte stream
///
/// # Examples
///
/// ```
/// use slot_logger::appenders::StreamAppender;
/// use slot_logger::Appender;
///
/// let mut appender = StreamAppender::new(Vec::new());
/// appender.append("[INFO ] hi\n", None).unwrap();
/// assert_eq!(appender.get_ref().as_slice(), b"[INFO ] hi\n");
/// ```
pub struct StreamAppender<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> StreamAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "stream".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for StreamAppender<W> {
    fn append(&mut self, entry: &str, _context: Option<&UserContext>) -> Result<()> {
        self.writer.write_all(entry.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
