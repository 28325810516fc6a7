//! Schema path resolution.

use super::probe::{probe_candidates, require_base_dir};
use super::types::{PathMetadata, PathResolutionError, ResolvedPath};
use crate::params::{Directive, Layer};
use std::path::Path;

/// File name of the schema inside each directive/layer directory.
pub const SCHEMA_FILE_NAME: &str = "base.schema.md";

/// Resolve `{base_dir}/{directive}/{layer}/base.schema.md`.
///
/// Same failure modes as [`super::resolve_prompt_path`], with a single candidate.
pub fn resolve_schema_path(
    base_dir: &Path,
    directive: &Directive,
    layer: &Layer,
) -> Result<ResolvedPath, PathResolutionError> {
    require_base_dir(base_dir)?;

    let candidate = base_dir
        .join(directive.as_str())
        .join(layer.as_str())
        .join(SCHEMA_FILE_NAME);

    probe_candidates(PathMetadata {
        base_dir: base_dir.to_path_buf(),
        attempted_paths: vec![candidate],
        adaptation: None,
        layer_used_for_lookup: layer.to_string(),
    })?
    .require_found()
}
