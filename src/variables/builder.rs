//! Error-accumulating variable builder.

use super::types::{
    BuilderError, FILE_PATH_VARIABLE_NAMES, PromptVariable, STANDARD_VARIABLE_NAMES,
    STDIN_VARIABLE_NAME, USER_VARIABLE_PREFIX, VariableKind, to_record,
};
use std::collections::BTreeMap;

/// Collects prompt variables, recording at most one error per call.
///
/// ```
/// use breakdown::variables::VariablesBuilder;
///
/// let mut builder = VariablesBuilder::new();
/// builder
///     .add_standard("destination_path", "/ws/project/out.md")
///     .add_user("uv-company", "ACME");
///
/// let variables = builder.build().unwrap();
/// assert_eq!(variables.len(), 2);
/// assert_eq!(builder.to_record()["uv-company"], "ACME");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariablesBuilder {
    variables: Vec<PromptVariable>,
    errors: Vec<BuilderError>,
}

impl VariablesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of the fixed standard variables (`input_text_file`, `destination_path`).
    pub fn add_standard(&mut self, name: &str, value: &str) -> &mut Self {
        if !STANDARD_VARIABLE_NAMES.contains(&name) {
            return self.reject(BuilderError::InvalidName {
                name: name.to_string(),
                kind: VariableKind::Standard,
            });
        }
        self.push_checked(PromptVariable::Standard {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Add a file path variable (`schema_file`).
    pub fn add_file_path(&mut self, name: &str, value: &str) -> &mut Self {
        if !FILE_PATH_VARIABLE_NAMES.contains(&name) {
            return self.reject(BuilderError::InvalidName {
                name: name.to_string(),
                kind: VariableKind::FilePath,
            });
        }
        self.push_checked(PromptVariable::FilePath {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Add piped input text. An empty value is accepted.
    pub fn add_stdin(&mut self, value: &str) -> &mut Self {
        if self.is_registered(STDIN_VARIABLE_NAME) {
            return self.reject(BuilderError::DuplicateVariable {
                name: STDIN_VARIABLE_NAME.to_string(),
            });
        }
        self.variables.push(PromptVariable::Stdin {
            value: value.to_string(),
        });
        self
    }

    /// Add a user variable; `name` must carry the `uv-` prefix.
    ///
    /// A name without the prefix is reported only as `InvalidPrefix`, even if
    /// it collides with another variable's name.
    pub fn add_user(&mut self, name: &str, value: &str) -> &mut Self {
        let has_prefix = name
            .strip_prefix(USER_VARIABLE_PREFIX)
            .is_some_and(|rest| !rest.is_empty());
        if !has_prefix {
            return self.reject(BuilderError::InvalidPrefix {
                name: name.to_string(),
            });
        }
        self.push_checked(PromptVariable::User {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Validated variables in insertion order, or every recorded error in call order.
    pub fn build(&self) -> Result<Vec<PromptVariable>, Vec<BuilderError>> {
        if self.errors.is_empty() {
            Ok(self.variables.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Name -> value map of the accepted variables.
    ///
    /// Only meaningful once `build()` has succeeded; rejected additions are
    /// simply absent here.
    pub fn to_record(&self) -> BTreeMap<String, String> {
        to_record(&self.variables)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[BuilderError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn is_registered(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v.name() == name)
    }

    fn push_checked(&mut self, variable: PromptVariable) -> &mut Self {
        let name = variable.name().to_string();
        if variable.value().trim().is_empty() {
            return self.reject(BuilderError::EmptyValue { name });
        }
        if self.is_registered(&name) {
            return self.reject(BuilderError::DuplicateVariable { name });
        }
        self.variables.push(variable);
        self
    }

    fn reject(&mut self, error: BuilderError) -> &mut Self {
        self.errors.push(error);
        self
    }
}
