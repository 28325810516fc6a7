//! Prompt template path resolution.

use super::probe::{probe_candidates, require_base_dir};
use super::types::{PathMetadata, PathResolutionError, ResolvedPath, ResolutionStatus};
use crate::params::{Adaptation, Directive, Layer};
use log::debug;
use std::path::Path;

/// Resolve the prompt template for a directive/layer pair.
///
/// Candidates live in `{base_dir}/{directive}/{layer}/`. The file name uses
/// `from_layer` when given (the `--input` override), otherwise `layer`:
///
/// 1. `f_{lookup_layer}_{adaptation}.md` (only with an adaptation)
/// 2. `f_{lookup_layer}.md`
///
/// # Returns
///
/// * `Ok(ResolvedPath)` - `Found` for the first candidate, `Fallback` for a later one
/// * `Err(BaseDirectoryNotFound)` - `base_dir` is missing; no candidate is probed
/// * `Err(TemplateNotFound)` - no candidate exists; carries every attempted path
pub fn resolve_prompt_path(
    base_dir: &Path,
    directive: &Directive,
    layer: &Layer,
    adaptation: Option<&Adaptation>,
    from_layer: Option<&Layer>,
) -> Result<ResolvedPath, PathResolutionError> {
    require_base_dir(base_dir)?;

    let lookup_layer = from_layer.unwrap_or(layer);
    let dir = base_dir.join(directive.as_str()).join(layer.as_str());

    let mut attempted_paths = Vec::with_capacity(2);
    if let Some(adaptation) = adaptation {
        attempted_paths.push(dir.join(format!("f_{}_{}.md", lookup_layer, adaptation)));
    }
    attempted_paths.push(dir.join(format!("f_{}.md", lookup_layer)));

    let resolved = probe_candidates(PathMetadata {
        base_dir: base_dir.to_path_buf(),
        attempted_paths,
        adaptation: adaptation.map(|a| a.to_string()),
        layer_used_for_lookup: lookup_layer.to_string(),
    })?;

    if let (ResolutionStatus::Fallback, Some(path)) = (resolved.status(), resolved.path()) {
        debug!("adaptation template missing, falling back to {}", path.display());
    }

    resolved.require_found()
}
