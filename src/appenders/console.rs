//! Console appender implementation

use crate::core::{Appender, Result};

/// Writes composed lines to stdout.
///
/// Lines arrive fully formatted, color codes included, so this appender does
/// no styling of its own.
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
