//! Logging macros for ergonomic message parameters.
//!
//! These macros convert trailing arguments through [`LogParam::from`] and
//! hand them to the logger as the positional parameter slice, so callers can
//! mix strings, numbers, booleans, and `serde_json` values freely.
//!
//! # Examples
//!
//! ```
//! use sync_logger_system::prelude::*;
//! use sync_logger_system::info;
//!
//! # fn main() -> Result<()> {
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With positional parameters
//! info!(logger, "Server listening on port {}", 8080)?;
//!
//! // Mixed parameter types
//! info!(logger, "User {} active: {}", "john_doe", true)?;
//! # Ok(())
//! # }
//! ```
//!
//! [`LogParam::from`]: crate::LogParam

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use sync_logger_system::prelude::*;
/// # fn main() -> Result<()> {
/// # let logger = Logger::new();
/// use sync_logger_system::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(,)?) => {
        $logger.log($level, $message, &[])
    };
    ($logger:expr, $level:expr, $message:expr, $($param:expr),+ $(,)?) => {
        $logger.log($level, $message, &[$($crate::LogParam::from($param)),+])
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use sync_logger_system::prelude::*;
/// # fn main() -> Result<()> {
/// # let logger = Logger::builder().level(LevelFilter::All).build();
/// use sync_logger_system::trace;
/// trace!(logger, "Entering calculate()")?;
/// trace!(logger, "Variable value: {}", 42)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use sync_logger_system::prelude::*;
/// # fn main() -> Result<()> {
/// # let logger = Logger::new();
/// use sync_logger_system::info;
/// info!(logger, "Application started")?;
/// info!(logger, "Processing {} items", 100)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use sync_logger_system::prelude::*;
/// # fn main() -> Result<()> {
/// # let logger = Logger::new();
/// use sync_logger_system::error;
/// error!(logger, "Failed to connect to database")?;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
