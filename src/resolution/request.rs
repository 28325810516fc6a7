//! Input to a single resolution.

use std::path::PathBuf;

/// Everything the CLI layer parsed for one invocation.
#[derive(Debug, Clone, Default)]
pub struct ResolutionRequest {
    /// First positional argument, e.g. `to`.
    pub directive: String,
    /// Second positional argument, e.g. `project`.
    pub layer: String,
    /// `--from`: explicit input file.
    pub from_file: Option<String>,
    /// `--destination`: output file or directory.
    pub destination: Option<String>,
    /// `--input`: layer used for the prompt template file name.
    pub from_layer: Option<String>,
    /// `--adaptation`: prompt template variant suffix.
    pub adaptation: Option<String>,
    /// `--config`: profile name.
    pub config_profile: Option<String>,
    /// `--use-schema`: a missing schema is an error instead of being skipped.
    pub use_schema: bool,
    /// Piped text, when the caller actually read some.
    pub stdin: Option<String>,
    /// `--uv-*` options in command-line order, keyed by option name (`uv-company`).
    pub user_variables: Vec<(String, String)>,
    /// Directory the command was invoked from.
    pub cwd: PathBuf,
}

impl ResolutionRequest {
    pub fn new(directive: impl Into<String>, layer: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            directive: directive.into(),
            layer: layer.into(),
            cwd: cwd.into(),
            ..Default::default()
        }
    }
}
