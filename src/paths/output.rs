//! Output destination resolution.

use super::probe::{absolutize, is_dir, normalize_lexically, normalize_separators};
use super::types::PathResolutionError;
use crate::params::Layer;
use chrono::{Local, NaiveDate};
use sha2::{Digest, Sha256};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const DIGEST_MASK: u32 = 0x0FFF_FFFF;

/// Per-process starting point for generated names, so two processes writing
/// into the same directory on the same day start from different digests.
static DIGEST_SEED: LazyLock<u32> = LazyLock::new(|| {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let digest = hasher.finalize();
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
});

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Next 7-hex-digit digest; unique within the process for 2^28 calls.
fn next_digest() -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{:07x}", DIGEST_SEED.wrapping_add(seq) & DIGEST_MASK)
}

/// Generate a default output file name: `{YYYYMMDD}_{7 hex digits}.md`.
///
/// Every call returns a new name, even for the same date.
pub fn default_output_filename(date: NaiveDate) -> String {
    format!("{}_{}.md", date.format("%Y%m%d"), next_digest())
}

/// Resolve the output destination using today's local date.
pub fn resolve_output_path(
    destination: Option<&str>,
    layer: &Layer,
    cwd: &Path,
) -> Result<PathBuf, PathResolutionError> {
    resolve_output_path_on(destination, layer, cwd, Local::now().date_naive())
}

/// Resolve the output destination with an explicit date for generated names.
///
/// Rules, in order:
///
/// 1. No destination: `{cwd}/{layer}/{generated}`.
/// 2. Trailing separator, or the destination is an existing directory:
///    `{destination}/{generated}`. The filesystem decides, since a bare
///    name like `out` may be a directory.
/// 3. A bare file name (one relative segment): `{cwd}/{layer}/{name}`, or
///    `{cwd}/{layer}/{name}/{generated}` when that is an existing directory.
/// 4. Anything else is a file path, resolved against `cwd`.
pub fn resolve_output_path_on(
    destination: Option<&str>,
    layer: &Layer,
    cwd: &Path,
    date: NaiveDate,
) -> Result<PathBuf, PathResolutionError> {
    let layer_dir = normalize_lexically(&cwd.join(layer.as_str()));

    let Some(raw) = destination.filter(|s| !s.trim().is_empty()) else {
        return Ok(layer_dir.join(default_output_filename(date)));
    };

    let raw = normalize_separators(raw);
    let requested = Path::new(&raw);
    let resolved = absolutize(requested, cwd);

    if raw.ends_with('/') || is_dir(&resolved)? {
        return Ok(resolved.join(default_output_filename(date)));
    }

    if is_bare_file_name(requested) {
        let target = layer_dir.join(requested);
        if is_dir(&target)? {
            return Ok(target.join(default_output_filename(date)));
        }
        return Ok(target);
    }

    Ok(resolved)
}

fn is_bare_file_name(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
