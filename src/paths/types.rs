//! Resolved path values and resolution errors.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned when a required path cannot be resolved.
#[derive(Error, Debug)]
pub enum PathResolutionError {
    /// The configured prompt or schema root does not exist.
    #[error("base directory not found: {}", path.display())]
    BaseDirectoryNotFound { path: PathBuf },

    /// None of the candidate files exist.
    #[error("template not found; tried: {}", display_paths(attempted))]
    TemplateNotFound { attempted: Vec<PathBuf> },

    /// The configuration cannot produce a usable resolution.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Probing a candidate failed for a reason other than "not found".
    #[error("failed to inspect '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of probing an ordered candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// The first candidate exists.
    Found,
    /// A later candidate exists.
    Fallback,
    /// No candidate exists.
    NotFound,
}

/// Provenance of a resolved path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathMetadata {
    /// Root the candidates were built under.
    pub base_dir: PathBuf,
    /// Candidates in the order they were probed.
    pub attempted_paths: Vec<PathBuf>,
    /// Adaptation suffix, if one was requested.
    pub adaptation: Option<String>,
    /// Layer used in the candidate file name.
    pub layer_used_for_lookup: String,
}

/// A path plus how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    value: PathBuf,
    status: ResolutionStatus,
    metadata: PathMetadata,
}

impl ResolvedPath {
    /// Build a resolution from the index of the first existing candidate.
    pub(crate) fn from_probe(hit: Option<usize>, metadata: PathMetadata) -> Self {
        let (value, status) = match hit {
            Some(0) => (metadata.attempted_paths[0].clone(), ResolutionStatus::Found),
            Some(i) => (metadata.attempted_paths[i].clone(), ResolutionStatus::Fallback),
            None => (PathBuf::new(), ResolutionStatus::NotFound),
        };
        Self {
            value,
            status,
            metadata,
        }
    }

    /// The resolved path, or `None` when nothing was found.
    pub fn path(&self) -> Option<&Path> {
        match self.status {
            ResolutionStatus::NotFound => None,
            ResolutionStatus::Found | ResolutionStatus::Fallback => Some(&self.value),
        }
    }

    /// The raw resolved value. Empty and meaningless when the status is
    /// `NotFound`; prefer [`ResolvedPath::path`] unless the status is known.
    pub fn value(&self) -> &Path {
        &self.value
    }

    pub fn status(&self) -> ResolutionStatus {
        self.status
    }

    pub fn metadata(&self) -> &PathMetadata {
        &self.metadata
    }

    pub fn attempted_paths(&self) -> &[PathBuf] {
        &self.metadata.attempted_paths
    }

    /// Turn a `NotFound` resolution into `TemplateNotFound`.
    pub(crate) fn require_found(self) -> Result<Self, PathResolutionError> {
        match self.status {
            ResolutionStatus::NotFound => Err(PathResolutionError::TemplateNotFound {
                attempted: self.metadata.attempted_paths,
            }),
            _ => Ok(self),
        }
    }
}
