//! File logging example
//!
//! Demonstrates logging to a file appender and reading back the result.
//!
//! Run with: cargo run --example file_logging

use sync_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Sync Logger System - File Logging Example ===\n");

    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .appender(FileAppender::new("application.log"))
        .build();

    println!("1. Logging to 'application.log':");

    logger.info("Application started", &[])?;
    logger.debug("Loading configuration...", &[])?;
    logger.info("Configuration loaded successfully", &[])?;
    logger.warn("Using default settings for some options", &[])?;
    logger.info("Connecting to database...", &[])?;
    logger.info("Database connection established", &[])?;
    logger.error("Failed to load optional plugin", &[])?;
    logger.info("Application initialization complete", &[])?;

    println!("\n2. Performing some operations:");

    // Simulate application work
    for i in 1..=5 {
        logger.info("Processing item {}/5", &[LogParam::from(i)])?;
        if i == 3 {
            logger.warn("Item 3 took longer than expected", &[])?;
        }
    }

    logger.info("All operations completed", &[])?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
