//! Compiled directive/layer grammars.

use crate::config::AppConfig;
use crate::paths::PathResolutionError;
use regex::Regex;

/// A compiled, whole-value matcher.
///
/// The configured expression is wrapped as `^(?:...)$`, so `to|summary`
/// accepts `to` but not `tomorrow`.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    source: String,
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl Pattern {
    /// Compile a pattern from its configured source text.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            regex,
            source: source.to_string(),
        })
    }

    /// Check whether the whole value matches.
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The pattern as written in the configuration.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Supplies the allowed-value grammar for directives and layers.
pub trait PatternSource {
    fn directive_pattern(&self) -> &Pattern;
    fn layer_pattern(&self) -> &Pattern;
}

/// Pattern source built from `params.two.*.pattern` in the profile config.
#[derive(Debug, Clone)]
pub struct TwoParamsPatterns {
    directive: Pattern,
    layer: Pattern,
}

impl TwoParamsPatterns {
    /// Compile both patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(TwoParamsPatterns)` - Both patterns compiled
    /// * `Err(PathResolutionError::InvalidConfiguration)` - A pattern is not a valid regex
    pub fn new(directive: &str, layer: &str) -> Result<Self, PathResolutionError> {
        Ok(Self {
            directive: compile("params.two.directive.pattern", directive)?,
            layer: compile("params.two.layer.pattern", layer)?,
        })
    }

    /// Compile the patterns declared in a loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, PathResolutionError> {
        Self::new(
            &config.params.two.directive.pattern,
            &config.params.two.layer.pattern,
        )
    }
}

fn compile(key: &str, source: &str) -> Result<Pattern, PathResolutionError> {
    Pattern::new(source).map_err(|e| PathResolutionError::InvalidConfiguration {
        message: format!("invalid regex in {}: '{}' - {}", key, source, e),
    })
}

impl PatternSource for TwoParamsPatterns {
    fn directive_pattern(&self) -> &Pattern {
        &self.directive
    }

    fn layer_pattern(&self) -> &Pattern {
        &self.layer
    }
}
