//! Multiple appender example
//!
//! Two appenders share one logger; one of them is disabled part-way through
//! and the level tag is switched off for all of them.
//!
//! Run with: cargo run --example multiple_appenders

use slot_logger::prelude::*;

fn log_all(logger: &Logger) {
    for level in LogLevel::ALL {
        slot_logger::log!(logger, level, "Test message: {}", level.rank());
    }
}

fn main() -> Result<()> {
    let logger = Logger::new();
    logger.set_level(LogLevel::Trace);

    let first = logger.register_appender_with_level(
        FnAppender::new(|entry, _| {
            print!("Appender 1: {}", entry);
            true
        }),
        None,
        LogLevel::Trace,
    )?;
    let second = logger.register_appender_with_level(
        FnAppender::new(|entry, _| {
            print!("Appender 2: {}", entry);
            true
        }),
        None,
        LogLevel::Trace,
    )?;

    println!("================== Both appenders ==================");
    log_all(&logger);

    println!("================== One appender ==================");
    logger.disable_appender(second)?;
    log_all(&logger);

    println!("================== Level tag off ==================");
    logger.set_format_option_all(FormatOption::Level, false);
    log_all(&logger);

    println!("================== Level tag on, threshold INFO ==================");
    logger.set_format_option(first, FormatOption::Level, true)?;
    logger.set_appender_level(first, LogLevel::Info)?;
    log_all(&logger);

    println!("================== Timestamp ==================");
    logger.set_format_option_all(FormatOption::Timestamp, true);
    log_all(&logger);

    Ok(())
}
