//! Logger configuration

use super::log_level::LevelFilter;

/// A named zero-argument function producing the replacement text for a
/// `{name}` token in the tag template.
pub type TagResolver = Box<dyn Fn() -> String + Send + Sync>;

/// Configuration owned by a [`Logger`](crate::core::Logger).
///
/// Read-only for the lifetime of the logger that owns it. Resolvers are kept
/// as an ordered list so tag tokens are expanded in the order they were
/// registered.
#[derive(Default)]
pub struct LoggerConfig {
    level: LevelFilter,
    tag_template: String,
    tag_resolvers: Vec<(String, TagResolver)>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold filter. Unset configs default to `Debug`.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the tag template, e.g. `"{level} | {request_id} |"`.
    #[must_use]
    pub fn with_tag_template(mut self, template: impl Into<String>) -> Self {
        self.tag_template = template.into();
        self
    }

    /// Register a resolver for a `{name}` token. Registration order is the
    /// expansion order.
    #[must_use]
    pub fn with_tag_resolver(
        mut self,
        name: impl Into<String>,
        resolver: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.tag_resolvers.push((name.into(), Box::new(resolver)));
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn tag_template(&self) -> &str {
        &self.tag_template
    }

    pub fn tag_resolvers(&self) -> &[(String, TagResolver)] {
        &self.tag_resolvers
    }
}

impl std::fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("tag_template", &self.tag_template)
            .field(
                "tag_resolvers",
                &self
                    .tag_resolvers
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
