//! Error types for the breakdown CLI.
//!
//! Each resolution layer owns its own error enum (value objects, profile,
//! path resolvers, variables builder). `BreakdownError` wraps them so the
//! binary can print one message and pick an exit code.

use crate::exit_codes;
use crate::params::ValidationError;
use crate::paths::PathResolutionError;
use crate::profile::ConfigProfileError;
use crate::render::TemplateError;
use crate::variables::BuilderError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for breakdown operations.
#[derive(Error, Debug)]
pub enum BreakdownError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be read or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The configuration profile identifier was rejected.
    #[error(transparent)]
    Profile(#[from] ConfigProfileError),

    /// A directive, layer, or adaptation value was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A required path could not be resolved.
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),

    /// One or more prompt variables were rejected.
    #[error("invalid prompt variables: {}", join_builder_errors(.0))]
    Variables(Vec<BuilderError>),

    /// The prompt template could not be rendered.
    #[error("failed to render prompt template: {0}")]
    Template(#[from] TemplateError),

    /// Reading the prompt template failed.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_builder_errors(errors: &[BuilderError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl BreakdownError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BreakdownError::UserError(_) => exit_codes::USER_ERROR,
            BreakdownError::Config(_) => exit_codes::USER_ERROR,
            BreakdownError::Io { .. } => exit_codes::USER_ERROR,
            BreakdownError::Profile(_) => exit_codes::VALIDATION_FAILURE,
            BreakdownError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            BreakdownError::PathResolution(_) => exit_codes::RESOLUTION_FAILURE,
            BreakdownError::Variables(_) => exit_codes::VARIABLE_FAILURE,
            BreakdownError::Template(_) => exit_codes::RENDER_FAILURE,
        }
    }
}

/// Result type alias for breakdown operations.
pub type Result<T> = std::result::Result<T, BreakdownError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ValueKind;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = BreakdownError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err: BreakdownError = ValidationError::EmptyInput {
            kind: ValueKind::Directive,
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn path_resolution_error_has_correct_exit_code() {
        let err: BreakdownError = PathResolutionError::BaseDirectoryNotFound {
            path: PathBuf::from("/ws/prompts"),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
    }

    #[test]
    fn variables_error_lists_every_problem() {
        let err = BreakdownError::Variables(vec![
            BuilderError::EmptyValue {
                name: "destination_path".to_string(),
            },
            BuilderError::InvalidPrefix {
                name: "company".to_string(),
            },
        ]);
        assert_eq!(err.exit_code(), exit_codes::VARIABLE_FAILURE);

        let msg = err.to_string();
        assert!(msg.contains("destination_path"));
        assert!(msg.contains("company"));
        assert!(msg.contains("; "));
    }

    #[test]
    fn template_error_has_correct_exit_code() {
        let err: BreakdownError = TemplateError::UndefinedVariable {
            name: "schema_file".to_string(),
            position: 0,
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::RENDER_FAILURE);
    }
}
