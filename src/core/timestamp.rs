//! Timestamp formatting utilities
//!
//! Timestamps are rendered with strftime-style patterns via chrono. A pattern
//! chrono cannot render yields an empty segment instead of an error.

use super::bounded::BoundedString;
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Default pattern: `18/10/26 14:03:59`
pub const DEFAULT_TIME_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Longest strftime pattern accepted for a per-appender format
pub const MAX_TIME_FORMAT_LEN: usize = 64;

/// Capacity of a rendered timestamp segment
pub const TIMESTAMP_CAPACITY: usize = 64;

/// Render `datetime` with `pattern` into a bounded buffer
///
/// # Examples
///
/// ```
/// use slot_logger::core::timestamp::format_timestamp;
/// use chrono::{Local, TimeZone};
///
/// let dt = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(format_timestamp(&dt, "%H:%M:%S").as_str(), "10:30:45");
/// ```
pub fn format_timestamp(datetime: &DateTime<Local>, pattern: &str) -> BoundedString {
    let mut out = BoundedString::new(TIMESTAMP_CAPACITY);
    // chrono reports unknown specifiers as fmt::Error while rendering
    if write!(out, "{}", datetime.format(pattern)).is_err() {
        out.clear();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_format() {
        let result = format_timestamp(&fixed_datetime(), DEFAULT_TIME_FORMAT);
        assert_eq!(result.as_str(), "08/01/25 10:30:45");
    }

    #[test]
    fn test_custom_format() {
        let result = format_timestamp(&fixed_datetime(), "%Y/%m/%d %H:%M");
        assert_eq!(result.as_str(), "2025/01/08 10:30");
    }

    #[test]
    fn test_custom_apache_format() {
        let result = format_timestamp(&fixed_datetime(), "%d/%b/%Y:%H:%M:%S");
        assert_eq!(result.as_str(), "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_invalid_pattern_degrades_to_empty() {
        let result = format_timestamp(&fixed_datetime(), "%Q");
        assert!(result.is_empty());
    }

    #[test]
    fn test_long_output_is_bounded() {
        let pattern = "%Y-%m-%d ".repeat(20);
        let result = format_timestamp(&fixed_datetime(), &pattern);
        assert_eq!(result.len(), TIMESTAMP_CAPACITY);
        assert!(result.is_truncated());
    }
}
