//! Template engine for prompt variable substitution.
//!
//! Performs `{name}` substitution using the record produced by the
//! variables builder.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`, where `name` is
//!   made of ASCII letters, digits, `_` and `-` (so `{uv-company}` works)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//! - Any other brace (`{ "json": 1 }`, `{}`) is copied through unchanged
//!
//! # Error Handling
//!
//! A well-formed placeholder with no value is an error rather than being
//! replaced with an empty string, so a typo in a template is caught.

use std::collections::BTreeMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// The byte offset of the opening `{`.
        position: usize,
    },
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Length in bytes of a `name}` run starting at `rest`, excluding the `}`.
fn placeholder_len(rest: &str) -> Option<usize> {
    let end = rest.find(|c: char| !is_name_char(c))?;
    (end > 0 && rest[end..].starts_with('}')).then_some(end)
}

/// Render a template string by substituting variables.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use breakdown::render::render_template;
///
/// let mut vars = BTreeMap::new();
/// vars.insert("destination_path".to_string(), "/ws/project/out.md".to_string());
///
/// let result = render_template("Write to {destination_path}.", &vars).unwrap();
/// assert_eq!(result, "Write to /ws/project/out.md.");
/// ```
pub fn render_template(
    template: &str,
    variables: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut pos = 0;

    while let Some(offset) = template[pos..].find(['{', '}']) {
        let start = pos + offset;
        result.push_str(&template[pos..start]);
        let rest = &template[start..];

        if rest.starts_with("{{") || rest.starts_with("}}") {
            result.push_str(&rest[..1]);
            pos = start + 2;
            continue;
        }

        if rest.starts_with('{')
            && let Some(len) = placeholder_len(&rest[1..])
        {
            let name = &rest[1..1 + len];
            match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position: start,
                    });
                }
            }
            pos = start + len + 2;
            continue;
        }

        // Lone brace is just a regular character
        result.push_str(&rest[..1]);
        pos = start + 1;
    }

    result.push_str(&template[pos..]);
    Ok(result)
}
