//! Configuration constants and defaults for breakdown.

/// Directory holding the profile config files, relative to the invocation directory.
pub const CONFIG_DIR: &str = ".agent/breakdown/config";

/// Default directive grammar.
pub const DEFAULT_DIRECTIVE_PATTERN: &str = "^(to|summary|defect)$";

/// Default layer grammar.
pub const DEFAULT_LAYER_PATTERN: &str = "^(project|issue|task)$";

// Default value functions for serde
pub(crate) fn default_working_dir() -> String {
    ".agent/breakdown".to_string()
}
pub(crate) fn default_prompt_base_dir() -> String {
    "prompts".to_string()
}
pub(crate) fn default_schema_base_dir() -> String {
    "schema".to_string()
}
pub(crate) fn default_directive_pattern() -> String {
    DEFAULT_DIRECTIVE_PATTERN.to_string()
}
pub(crate) fn default_layer_pattern() -> String {
    DEFAULT_LAYER_PATTERN.to_string()
}
