//! Appender trait for log output destinations

use super::error::Result;

/// A delivery target for composed log lines.
///
/// Appenders receive the finished line; composition is done by the time a
/// line reaches them. `append` performs exactly one write per call.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
