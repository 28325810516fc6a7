//! Configuration model for breakdown.
//!
//! This module defines the AppConfig struct that represents the merged
//! `.agent/breakdown/config/{profile}-app.yml` and `{profile}-user.yml`
//! files. It supports forward-compatible YAML parsing (unknown fields are
//! ignored), defaults for every key, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{
    AppConfig, ParamsSection, PatternEntry, PromptSection, SchemaSection, TwoParamsSection,
};
pub use operations::config_dir;
