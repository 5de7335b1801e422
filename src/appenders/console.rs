//! Console appender implementation

use crate::core::{Appender, LogLevel, Result, UserContext};
use std::io::Write;

/// Writes entries to stdout, or to stderr for error-level entries
///
/// The rendered entry carries no level once it reaches the appender, so the
/// stream is chosen by looking at the level tag in front of the message.
pub struct ConsoleAppender {
    errors_to_stderr: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            errors_to_stderr: true,
        }
    }

    /// Send everything to stdout
    pub fn stdout_only() -> Self {
        Self {
            errors_to_stderr: false,
        }
    }

    fn is_error_entry(entry: &str) -> bool {
        matches!(leading_level(entry), Some(LogLevel::Error | LogLevel::Fatal))
    }
}

/// Level tag among the first two segments, before the message body
///
/// The timestamp segment may precede the tag; color escapes around the tag
/// are skipped.
fn leading_level(entry: &str) -> Option<LogLevel> {
    let mut rest = entry;
    for _ in 0..2 {
        let segment = skip_escape(rest).strip_prefix('[')?;
        let end = segment.find(']')?;
        if let Ok(level) = segment[..end].trim_end().parse::<LogLevel>() {
            return Some(level);
        }
        rest = segment[end + 1..].strip_prefix(' ')?;
    }
    None
}

/// Skip one leading `ESC [ ... m` sequence
fn skip_escape(s: &str) -> &str {
    s.strip_prefix("\x1b[")
        .and_then(|tail| tail.find('m').map(|end| &tail[end + 1..]))
        .unwrap_or(s)
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &str, _context: Option<&UserContext>) -> Result<()> {
        // Route Error and Fatal levels to stderr, others to stdout
        if self.errors_to_stderr && Self::is_error_entry(entry) {
            std::io::stderr().lock().write_all(entry.as_bytes())?;
        } else {
            std::io::stdout().lock().write_all(entry.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
