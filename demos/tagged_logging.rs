//! Tag template example
//!
//! Demonstrates tag templates with the `{level}` token and custom resolvers.
//!
//! Run with: cargo run --example tagged_logging

use std::sync::atomic::{AtomicU64, Ordering};
use sync_logger_system::prelude::*;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn main() -> Result<()> {
    println!("=== Sync Logger System - Tagged Logging Example ===\n");

    let logger = Logger::builder()
        .level(LevelFilter::All)
        .tag_template("{level} | {service} | request #{request} |")
        .tag_resolver("service", || "api-gateway".to_string())
        .tag_resolver("request", || {
            REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed).to_string()
        })
        .build();

    println!("1. Every line carries the resolved tag:");
    logger.info("Accepted connection", &[])?;
    logger.debug("Negotiating protocol", &[])?;
    logger.warn("Slow upstream response", &[])?;

    println!("\n2. Tags compose with positional parameters:");
    logger.error(
        "Upstream returned {} after {} retries",
        &[LogParam::from(502), LogParam::from(3)],
    )?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
