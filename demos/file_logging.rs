//! File logging example
//!
//! Demonstrates a file appender next to a console appender, each with its
//! own threshold and formatting.
//!
//! Run with: cargo run --example file_logging

use slot_logger::prelude::*;
use slot_logger::{error, info, warn};

fn main() -> Result<()> {
    println!("=== Slot Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("slot_logger_example.log");

    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .appender_with(
            FileAppender::new(&log_path)?,
            LogLevel::Debug,
            FormatOptions::new()
                .with_timestamp(true)
                .with_location(true)
                .with_function(true),
        )
        .appender_with(
            ConsoleAppender::new(),
            LogLevel::Warn,
            FormatOptions::new().with_color(true),
        )
        .build()?;

    info!(logger, "Application started");
    warn!(logger, "Cache miss rate at {}%", 37);
    error!(logger, "Failed to reach {}", "db-primary");

    logger.flush()?;

    println!("\nLogs written to: {}", log_path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
