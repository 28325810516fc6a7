//! Directive, layer and adaptation value objects.

use super::pattern::{Pattern, PatternSource};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Upper bound on directive, layer and adaptation lengths.
pub const MAX_VALUE_LENGTH: usize = 100;

/// Which parameter a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Directive,
    Layer,
    Adaptation,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Directive => write!(f, "directive"),
            ValueKind::Layer => write!(f, "layer"),
            ValueKind::Adaptation => write!(f, "adaptation"),
        }
    }
}

/// Error returned when a parameter value is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} must not be empty")]
    EmptyInput { kind: ValueKind },

    #[error("invalid {kind} '{value}': does not match pattern '{pattern}'")]
    InvalidFormat {
        kind: ValueKind,
        value: String,
        pattern: String,
    },

    #[error("{kind} is too long ({length} characters, maximum {max})")]
    TooLong {
        kind: ValueKind,
        length: usize,
        max: usize,
    },

    #[error("invalid {kind} '{value}': {reason}")]
    InvalidPath {
        kind: ValueKind,
        value: String,
        reason: String,
    },
}

fn check_length(kind: ValueKind, raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyInput { kind });
    }
    let length = raw.chars().count();
    if length > MAX_VALUE_LENGTH {
        return Err(ValidationError::TooLong {
            kind,
            length,
            max: MAX_VALUE_LENGTH,
        });
    }
    Ok(())
}

fn validate(kind: ValueKind, raw: &str, pattern: &Pattern) -> Result<String, ValidationError> {
    check_length(kind, raw)?;
    if !pattern.matches(raw) {
        return Err(ValidationError::InvalidFormat {
            kind,
            value: raw.to_string(),
            pattern: pattern.source().to_string(),
        });
    }
    Ok(raw.to_string())
}

/// Transformation family, e.g. `to`, `summary`, `defect`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Directive(String);

impl Directive {
    pub fn create(raw: &str, patterns: &dyn PatternSource) -> Result<Self, ValidationError> {
        validate(ValueKind::Directive, raw, patterns.directive_pattern()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Target granularity, e.g. `project`, `issue`, `task`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Layer(String);

impl Layer {
    pub fn create(raw: &str, patterns: &dyn PatternSource) -> Result<Self, ValidationError> {
        validate(ValueKind::Layer, raw, patterns.layer_pattern()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Prompt-template variant suffix (`f_{layer}_{adaptation}.md`).
///
/// Not pattern-checked, but it becomes part of a file name, so path
/// separators and parent references are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Adaptation(String);

impl Adaptation {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        let kind = ValueKind::Adaptation;
        check_length(kind, raw)?;

        let reason = if raw.contains(['/', '\\']) {
            Some("must not contain path separators")
        } else if raw.contains("..") {
            Some("must not contain '..'")
        } else if raw.contains('\0') {
            Some("must not contain NUL bytes")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ValidationError::InvalidPath {
                kind,
                value: raw.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(Self(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })*
    };
}

impl_display!(Directive, Layer, Adaptation);
