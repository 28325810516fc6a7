//! AppConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Resolved configuration for one profile.
///
/// This struct represents the merged contents of `{profile}-app.yml` and
/// `{profile}-user.yml`. Unknown fields in the YAML are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace root, absolute or relative to the invocation directory.
    #[serde(default = "default_working_dir")]
    pub working_dir: String,

    /// Prompt template location.
    pub app_prompt: PromptSection,

    /// Schema file location.
    pub app_schema: SchemaSection,

    /// Directive/layer grammars.
    pub params: ParamsSection,
}

/// `app_prompt` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSection {
    /// Prompt base directory, relative to `working_dir` unless absolute.
    #[serde(default = "default_prompt_base_dir")]
    pub base_dir: String,
}

/// `app_schema` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSection {
    /// Schema base directory, relative to `working_dir` unless absolute.
    #[serde(default = "default_schema_base_dir")]
    pub base_dir: String,
}

/// `params` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsSection {
    pub two: TwoParamsSection,
}

/// `params.two` section: grammars for the two positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoParamsSection {
    #[serde(default = "PatternEntry::directive")]
    pub directive: PatternEntry,
    #[serde(default = "PatternEntry::layer")]
    pub layer: PatternEntry,
}

/// A single `pattern:` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub pattern: String,
}

impl PatternEntry {
    fn directive() -> Self {
        Self {
            pattern: default_directive_pattern(),
        }
    }

    fn layer() -> Self {
        Self {
            pattern: default_layer_pattern(),
        }
    }
}

impl Default for PromptSection {
    fn default() -> Self {
        Self {
            base_dir: default_prompt_base_dir(),
        }
    }
}

impl Default for SchemaSection {
    fn default() -> Self {
        Self {
            base_dir: default_schema_base_dir(),
        }
    }
}

impl Default for TwoParamsSection {
    fn default() -> Self {
        Self {
            directive: PatternEntry::directive(),
            layer: PatternEntry::layer(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            app_prompt: PromptSection::default(),
            app_schema: SchemaSection::default(),
            params: ParamsSection::default(),
        }
    }
}
