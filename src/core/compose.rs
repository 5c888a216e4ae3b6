//! Message composition
//!
//! Assembles the final log line from the color prefix, the resolved tag, and
//! the message, then fills positional placeholders. Composition is a pure
//! function of its inputs; the active level is passed down rather than kept
//! on the logger, so concurrent calls cannot observe each other's level.

use super::config::LoggerConfig;
use super::log_level::LogLevel;
use super::params::{fill, LogParam};
use super::tag;

/// Build the complete line for a message at `level`.
///
/// The layout is `<prefix> <tag> <message>` with the tag and its trailing
/// space omitted when the resolved tag is empty. Placeholder filling runs
/// over the fully assembled line.
pub(crate) fn compose(
    config: &LoggerConfig,
    level: LogLevel,
    message: &str,
    params: &[LogParam],
) -> String {
    let (open, close) = level.color_codes();
    let tag = tag::resolve(config, level.name());

    let mut line = String::with_capacity(message.len() + tag.len() + 16);
    line.push_str(open);
    line.push('[');
    line.push_str(level.label());
    line.push(']');
    line.push_str(close);
    line.push(' ');
    if !tag.is_empty() {
        line.push_str(&tag);
        line.push(' ');
    }
    line.push_str(message);

    fill(&line, params)
}
