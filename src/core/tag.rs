//! Tag template resolution

use super::config::LoggerConfig;

/// Expand the configured tag template for a message at `level_name`.
///
/// The literal token `{level}` is replaced first, then each registered
/// resolver's `{name}` token in registration order. Replacement is
/// first-occurrence only; a token that appears twice keeps its second
/// occurrence verbatim. The result is not trimmed, so any spacing written
/// into the template survives.
///
/// A template that is empty or whitespace-only resolves to the empty string,
/// which the composer treats as "no tag".
pub(crate) fn resolve(config: &LoggerConfig, level_name: &str) -> String {
    let template = config.tag_template();
    if template.trim().is_empty() {
        return String::new();
    }

    let mut tag = template.replacen("{level}", level_name, 1);
    for (name, resolver) in config.tag_resolvers() {
        let token = format!("{{{}}}", name);
        tag = tag.replacen(&token, &resolver(), 1);
    }
    tag
}
