//! Variable kinds, names and builder errors.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Names accepted by `add_standard`.
pub const STANDARD_VARIABLE_NAMES: [&str; 2] = ["input_text_file", "destination_path"];

/// Names accepted by `add_file_path`.
pub const FILE_PATH_VARIABLE_NAMES: [&str; 1] = ["schema_file"];

/// Substitution name of piped input text.
pub const STDIN_VARIABLE_NAME: &str = "input_text";

/// Required prefix of user-supplied variable names.
pub const USER_VARIABLE_PREFIX: &str = "uv-";

/// Which builder method produced a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    Standard,
    FilePath,
    Stdin,
    User,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Standard => write!(f, "standard"),
            VariableKind::FilePath => write!(f, "file path"),
            VariableKind::Stdin => write!(f, "stdin"),
            VariableKind::User => write!(f, "user"),
        }
    }
}

/// A validated substitution value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromptVariable {
    Standard { name: String, value: String },
    FilePath { name: String, value: String },
    Stdin { value: String },
    User { name: String, value: String },
}

impl PromptVariable {
    /// Name used for `{name}` substitution.
    pub fn name(&self) -> &str {
        match self {
            PromptVariable::Standard { name, .. }
            | PromptVariable::FilePath { name, .. }
            | PromptVariable::User { name, .. } => name,
            PromptVariable::Stdin { .. } => STDIN_VARIABLE_NAME,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            PromptVariable::Standard { value, .. }
            | PromptVariable::FilePath { value, .. }
            | PromptVariable::Stdin { value }
            | PromptVariable::User { value, .. } => value,
        }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            PromptVariable::Standard { .. } => VariableKind::Standard,
            PromptVariable::FilePath { .. } => VariableKind::FilePath,
            PromptVariable::Stdin { .. } => VariableKind::Stdin,
            PromptVariable::User { .. } => VariableKind::User,
        }
    }
}

/// Project variables to the name -> value map the renderer consumes.
pub fn to_record(variables: &[PromptVariable]) -> BTreeMap<String, String> {
    variables
        .iter()
        .map(|v| (v.name().to_string(), v.value().to_string()))
        .collect()
}

/// A rejected variable addition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("'{name}' is not a valid {kind} variable name")]
    InvalidName { name: String, kind: VariableKind },

    #[error("variable '{name}' has an empty value")]
    EmptyValue { name: String },

    #[error("variable '{name}' is defined more than once")]
    DuplicateVariable { name: String },

    #[error("user variable '{name}' must start with '{USER_VARIABLE_PREFIX}' followed by a name")]
    InvalidPrefix { name: String },
}
