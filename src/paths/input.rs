//! Input file path resolution.

use super::probe::{absolutize, normalize_separators};
use std::path::{Path, PathBuf};

/// Value of `--from` that explicitly selects piped input.
pub const STDIN_MARKER: &str = "-";

/// Resolve the `--from` argument to an absolute path.
///
/// Returns `None` when no file was given (or `-`), meaning input comes from
/// stdin; this function never reads stdin itself. The file does not need
/// to exist: only reading it later can fail.
///
/// The `--input` layer override is deliberately not a parameter. It changes
/// which prompt template is picked, never where the input file is.
pub fn resolve_input_path(explicit: Option<&str>, cwd: &Path) -> Option<PathBuf> {
    let raw = explicit.filter(|s| !s.trim().is_empty())?;
    if raw == STDIN_MARKER {
        return None;
    }
    Some(absolutize(Path::new(&normalize_separators(raw)), cwd))
}
