//! File appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends composed lines to a file, one line plus newline per call.
///
/// Each `append` opens the file (creating it if absent), writes, and closes
/// again; no handle is held between calls and existing content is never
/// truncated. Open and write failures surface to the logging call that hit
/// them.
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    /// # Example
    ///
    /// ```no_run
    /// use sync_logger_system::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/app.log");
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::file_appender(self.path.display().to_string(), e.to_string()))?;

        file.write_all(line.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|e| {
                LoggerError::io_operation(
                    "appending log line",
                    format!("cannot write to '{}'", self.path.display()),
                    e,
                )
            })
    }

    fn flush(&mut self) -> Result<()> {
        // Nothing is buffered; the file is closed after every append.
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
