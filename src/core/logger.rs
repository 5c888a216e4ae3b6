//! Main logger implementation

use super::{
    appender::Appender,
    compose::compose,
    config::LoggerConfig,
    error::Result,
    log_level::{LevelFilter, LogLevel},
    params::LogParam,
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;

/// Synchronous leveled logger.
///
/// Every passing call composes one line, writes it to the attached appender,
/// and returns it. Filtered calls return `Ok(None)` and produce no output.
/// Composition never fails; appender I/O errors propagate to the caller of
/// the failing call.
///
/// The configuration is fixed at construction time and the appender sits
/// behind a lock, so a `Logger` can be shared freely between threads.
///
/// # Example
///
/// ```
/// use sync_logger_system::prelude::*;
///
/// # fn main() -> Result<()> {
/// let logger = Logger::new();
/// let line = logger.info("Server listening on port {}", &[LogParam::from(8080)])?;
/// assert_eq!(
///     line.as_deref(),
///     Some("\x1b[32m[INFO]\x1b[39m Server listening on port 8080"),
/// );
/// # Ok(())
/// # }
/// ```
pub struct Logger {
    config: LoggerConfig,
    appender: Mutex<Box<dyn Appender>>,
}

impl Logger {
    /// Create a logger with the default configuration (`Debug` threshold, no
    /// tag template) writing to the console.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::new(), Box::new(ConsoleAppender::new()))
    }

    /// Create a logger from an explicit configuration and appender.
    #[must_use]
    pub fn with_config(config: LoggerConfig, appender: Box<dyn Appender>) -> Self {
        Self {
            config,
            appender: Mutex::new(appender),
        }
    }

    /// Start building a logger with a fluent API.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Log a message at `level` with positional parameters.
    ///
    /// Returns the composed line, or `None` if the level did not pass the
    /// configured threshold. An appender failure surfaces as an error; the
    /// line is composed but not considered delivered.
    pub fn log(
        &self,
        level: LogLevel,
        message: &str,
        params: &[LogParam],
    ) -> Result<Option<String>> {
        if !self.config.level().should_log(level) {
            return Ok(None);
        }

        let line = compose(&self.config, level, message, params);
        self.appender.lock().append(&line)?;
        Ok(Some(line))
    }

    #[inline]
    pub fn trace(&self, message: &str, params: &[LogParam]) -> Result<Option<String>> {
        self.log(LogLevel::Trace, message, params)
    }

    #[inline]
    pub fn debug(&self, message: &str, params: &[LogParam]) -> Result<Option<String>> {
        self.log(LogLevel::Debug, message, params)
    }

    #[inline]
    pub fn info(&self, message: &str, params: &[LogParam]) -> Result<Option<String>> {
        self.log(LogLevel::Info, message, params)
    }

    #[inline]
    pub fn warn(&self, message: &str, params: &[LogParam]) -> Result<Option<String>> {
        self.log(LogLevel::Warn, message, params)
    }

    #[inline]
    pub fn error(&self, message: &str, params: &[LogParam]) -> Result<Option<String>> {
        self.log(LogLevel::Error, message, params)
    }

    #[inline]
    pub fn fatal(&self, message: &str, params: &[LogParam]) -> Result<Option<String>> {
        self.log(LogLevel::Fatal, message, params)
    }

    /// Flush the attached appender.
    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API.
///
/// # Example
///
/// ```
/// use sync_logger_system::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LevelFilter::All)
///     .tag_template("{level} | {service} |")
///     .tag_resolver("service", || "api".to_string())
///     .appender(ConsoleAppender::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::new(),
            appender: None,
        }
    }

    /// Set the threshold filter. Accepts a [`LevelFilter`] or a bare
    /// [`LogLevel`].
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.config = self.config.with_level(level);
        self
    }

    /// Set the tag template.
    #[must_use = "builder methods return a new value"]
    pub fn tag_template(mut self, template: impl Into<String>) -> Self {
        self.config = self.config.with_tag_template(template);
        self
    }

    /// Register a tag resolver for a `{name}` token.
    #[must_use = "builder methods return a new value"]
    pub fn tag_resolver(
        mut self,
        name: impl Into<String>,
        resolver: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.config = self.config.with_tag_resolver(name, resolver);
        self
    }

    /// Attach the appender. The last one set wins; the default is the
    /// console.
    #[must_use = "builder methods return a new value"]
    pub fn appender(mut self, appender: impl Appender + 'static) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Build the logger.
    pub fn build(self) -> Logger {
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));
        Logger::with_config(self.config, appender)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
