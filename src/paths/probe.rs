//! Filesystem existence probes and lexical path normalization.

use super::types::{PathMetadata, PathResolutionError, ResolvedPath};
use log::debug;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Stat `path`; `Ok(None)` when it does not exist.
fn stat(path: &Path) -> Result<Option<std::fs::Metadata>, PathResolutionError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(source) => Err(PathResolutionError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn is_file(path: &Path) -> Result<bool, PathResolutionError> {
    Ok(stat(path)?.is_some_and(|m| m.is_file()))
}

pub(crate) fn is_dir(path: &Path) -> Result<bool, PathResolutionError> {
    Ok(stat(path)?.is_some_and(|m| m.is_dir()))
}

/// Fail with `BaseDirectoryNotFound` unless `base_dir` is an existing directory.
pub(crate) fn require_base_dir(base_dir: &Path) -> Result<(), PathResolutionError> {
    if is_dir(base_dir)? {
        Ok(())
    } else {
        Err(PathResolutionError::BaseDirectoryNotFound {
            path: base_dir.to_path_buf(),
        })
    }
}

/// Probe `metadata.attempted_paths` in order and stop at the first file.
pub(crate) fn probe_candidates(
    metadata: PathMetadata,
) -> Result<ResolvedPath, PathResolutionError> {
    let mut hit = None;
    for (i, candidate) in metadata.attempted_paths.iter().enumerate() {
        if is_file(candidate)? {
            hit = Some(i);
            break;
        }
        debug!("candidate not found: {}", candidate.display());
    }
    Ok(ResolvedPath::from_probe(hit, metadata))
}

/// Convert backslash separators to forward slashes.
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Remove `.` components and resolve `..` against preceding components.
///
/// Purely lexical: symlinks are not followed and repeated segments such as
/// `a/b/a/b` are kept as written.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Resolve `path` against `cwd` when relative, then normalize.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&cwd.join(path))
    }
}
