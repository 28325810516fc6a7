//! Path resolution for prompt templates, schemas, input and output files.
//!
//! This module provides:
//!
//! - **Base directories**: absolute prompt/schema roots from config + working dir
//! - **Prompt templates**: `{base}/{directive}/{layer}/f_{layer}[_{adaptation}].md`
//! - **Schemas**: `{base}/{directive}/{layer}/base.schema.md`
//! - **Input**: the explicit `--from` file, if any
//! - **Output**: the `--destination` path, or a generated `{YYYYMMDD}_{hash}.md`
//!
//! Resolvers only compute paths and stat candidates. They never read or
//! write file content.

mod base_dir;
mod input;
mod output;
mod probe;
mod prompt;
mod schema;
mod types;


pub use base_dir::{BaseDirs, resolve_base_dir};
pub use input::{STDIN_MARKER, resolve_input_path};
pub use output::{default_output_filename, resolve_output_path, resolve_output_path_on};
pub use probe::{absolutize, normalize_lexically, normalize_separators};
pub use prompt::resolve_prompt_path;
pub use schema::{SCHEMA_FILE_NAME, resolve_schema_path};
pub use types::{PathMetadata, PathResolutionError, ResolutionStatus, ResolvedPath};
