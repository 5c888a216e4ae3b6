//! Appender implementations

pub mod console;
pub mod file;

pub use console::ConsoleAppender;
pub use file::FileAppender;

// Re-export the trait alongside its implementations
pub use crate::core::Appender;
