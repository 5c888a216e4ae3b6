//! Basic logger usage example
//!
//! Demonstrates leveled logging with the console appender and different
//! threshold filters.
//!
//! Run with: cargo run --example basic_usage

use sync_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Sync Logger System - Basic Usage Example ===\n");

    // Log everything, regardless of level
    let logger = Logger::builder().level(LevelFilter::All).build();

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message", &[])?;
    logger.debug("This is a debug message", &[])?;
    logger.info("This is an info message", &[])?;
    logger.warn("This is a warning message", &[])?;
    logger.error("This is an error message", &[])?;
    logger.fatal("This is a fatal message", &[])?;

    println!("\n2. Logging with an Info threshold - trace and debug won't show:");

    let logger = Logger::builder().level(LogLevel::Info).build();
    logger.trace("Trace message (hidden)", &[])?;
    logger.debug("Debug message (hidden)", &[])?;
    logger.info("Info message (visible)", &[])?;
    logger.warn("Warning message (visible)", &[])?;

    println!("\n3. Positional parameters:");

    logger.info("Processing {} items for user {}", &[LogParam::from(100), LogParam::from("john_doe")])?;
    logger.warn(
        "Payload was {}",
        &[LogParam::from(serde_json::json!({"retries": 3, "ok": false}))],
    )?;

    // Every passing call also returns the exact line it wrote
    let line = logger.info("This is cool!", &[])?;
    println!("\n4. Returned line: {:?}", line);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
