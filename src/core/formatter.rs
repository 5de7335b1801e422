//! Entry rendering
//!
//! Turns a [`LogEntry`] into the text handed to an appender:
//!
//! ```text
//! [<timestamp>] [<LEVEL>] [<file>:<line>] [<function>] <message>\n
//! ```
//!
//! Each bracketed segment is controlled by one flag of [`FormatOptions`].
//! Segments are written into bounded buffers, so an entry never exceeds the
//! capacity it is rendered with.

use super::bounded::BoundedString;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::format_timestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const ANSI_RESET: &str = "\x1b[0m";

/// Per-appender formatting configuration
///
/// # Examples
///
/// ```
/// use slot_logger::FormatOptions;
///
/// let options = FormatOptions::new()
///     .with_timestamp(true)
///     .with_location(true)
///     .with_time_format("%H:%M:%S");
/// assert!(options.level);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Emit the `[timestamp]` segment
    pub timestamp: bool,
    /// Emit the `[LEVEL]` segment
    pub level: bool,
    /// Emit the `[file:line]` segment when a location is known
    pub location: bool,
    /// Emit the `[function]` segment when a location is known
    pub function: bool,
    /// Wrap the level, location and function segments in ANSI colors
    pub color: bool,
    /// strftime pattern overriding the logger default
    pub time_format: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            timestamp: false,
            level: true,
            location: false,
            function: false,
            color: false,
            time_format: None,
        }
    }
}

/// A single toggleable formatting flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatOption {
    Timestamp,
    Level,
    Location,
    Function,
    Color,
}

impl FormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything off, including the level tag
    #[must_use]
    pub fn message_only() -> Self {
        Self {
            level: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, on: bool) -> Self {
        self.timestamp = on;
        self
    }

    #[must_use]
    pub fn with_level(mut self, on: bool) -> Self {
        self.level = on;
        self
    }

    #[must_use]
    pub fn with_location(mut self, on: bool) -> Self {
        self.location = on;
        self
    }

    #[must_use]
    pub fn with_function(mut self, on: bool) -> Self {
        self.function = on;
        self
    }

    #[must_use]
    pub fn with_color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, pattern: &str) -> Self {
        self.time_format = Some(pattern.to_string());
        self
    }

    pub fn set(&mut self, option: FormatOption, on: bool) {
        match option {
            FormatOption::Timestamp => self.timestamp = on,
            FormatOption::Level => self.level = on,
            FormatOption::Location => self.location = on,
            FormatOption::Function => self.function = on,
            FormatOption::Color => self.color = on,
        }
    }

    pub fn get(&self, option: FormatOption) -> bool {
        match option {
            FormatOption::Timestamp => self.timestamp,
            FormatOption::Level => self.level,
            FormatOption::Location => self.location,
            FormatOption::Function => self.function,
            FormatOption::Color => self.color,
        }
    }
}

/// Render `entry` for one appender
///
/// The result is at most `capacity` bytes and always ends in `\n`; one byte
/// of the capacity is kept for the newline. `default_time_format` applies
/// when the options carry no pattern of their own.
pub fn render_entry(
    entry: &LogEntry<'_>,
    options: &FormatOptions,
    default_time_format: &str,
    capacity: usize,
) -> String {
    let mut out = BoundedString::new(capacity.saturating_sub(1));

    if options.timestamp {
        let pattern = options.time_format.as_deref().unwrap_or(default_time_format);
        let stamp = format_timestamp(&entry.timestamp, pattern);
        let _ = write!(out, "[{}] ", stamp);
    }

    if options.level {
        colored_segment(&mut out, entry.level, options.color, |out| {
            let _ = write!(out, "[{}]", entry.level.padded_str());
        });
    }

    if let Some(location) = entry.location {
        if options.location {
            colored_segment(&mut out, entry.level, options.color, |out| {
                let _ = write!(out, "[{}:{}]", location.file, location.line);
            });
        }
        if options.function {
            colored_segment(&mut out, entry.level, options.color, |out| {
                let _ = write!(out, "[{}]", location.function);
            });
        }
    }

    out.push_str(entry.message);

    let mut rendered = out.into_string();
    rendered.push('\n');
    rendered
}

/// Write one segment plus its trailing space, optionally color-wrapped
///
/// A colored segment is only opened when its escape and the reset both fit,
/// and the body is bounded so the reset is never cut. Otherwise the segment
/// is written uncolored.
fn colored_segment(
    out: &mut BoundedString,
    level: LogLevel,
    color: bool,
    body: impl FnOnce(&mut BoundedString),
) {
    let code = level.color_code().to_fg_str();
    // "\x1b[" + code + "m"
    let open_len = code.len() + 3;
    if color && out.remaining() >= open_len + ANSI_RESET.len() {
        let _ = write!(out, "\x1b[{}m", code);
        let mut inner = BoundedString::new(out.remaining() - ANSI_RESET.len());
        body(&mut inner);
        out.push_str(inner.as_str());
        out.push_str(ANSI_RESET);
    } else {
        body(out);
    }
    out.push_str(" ");
}
