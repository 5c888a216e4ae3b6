//! # Sync Logger System
//!
//! A lightweight, synchronous Rust logging library with leveled filtering,
//! tag templates, and positional message parameters.
//!
//! ## Features
//!
//! - **Leveled Filtering**: Six severity levels plus `All`/`Off` thresholds
//! - **Tag Templates**: `{level}` and custom `{name}` tokens expanded per call
//! - **Positional Parameters**: `{}` placeholders with type-aware rendering
//! - **Pluggable Appenders**: Console, file, and custom appenders
//! - **Predictable Output**: Every passing call returns the exact line it wrote

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, LevelFilter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LogLevel,
        LogParam, Result, TagResolver, ALL_LEVELS,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    Appender, LevelFilter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LogLevel, LogParam,
    Result, TagResolver, ALL_LEVELS,
};
