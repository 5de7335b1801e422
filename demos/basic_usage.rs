//! Basic logger usage example
//!
//! Demonstrates a console appender, level thresholds and formatting flags.
//!
//! Run with: cargo run --example basic_usage

use slot_logger::prelude::*;
use slot_logger::{debug, error, fatal, info, trace, warn};

fn main() -> Result<()> {
    println!("=== Slot Logger - Basic Usage Example ===\n");

    let logger = Logger::new();
    let console = logger.register_appender_with_level(ConsoleAppender::new(), None, LogLevel::Trace)?;
    logger.set_level(LogLevel::Trace);

    println!("1. Logging at different levels:");
    trace!(logger, "Test message: {}", 0);
    debug!(logger, "Test message: {}", 1);
    info!(logger, "Test message: {}", 2);
    warn!(logger, "Test message: {}", 3);
    error!(logger, "Test message: {}", 4);
    fatal!(logger, "Test message: {}", 5);

    println!("\n2. Timestamp, location, function and colors:");
    logger.set_time_format(console, Some("%H:%M:%S"))?;
    for option in [
        FormatOption::Timestamp,
        FormatOption::Location,
        FormatOption::Function,
        FormatOption::Color,
    ] {
        logger.set_format_option(console, option, true)?;
    }
    info!(logger, "Server listening on port {}", 8080);
    error!(logger, "Connection refused");

    println!("\n3. Appender threshold set to WARN:");
    logger.set_appender_level(console, LogLevel::Warn)?;
    info!(logger, "Info message (hidden)");
    warn!(logger, "Warning message (visible)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
