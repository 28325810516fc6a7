//! Prompt and schema root resolution.

use super::probe::absolutize;
use crate::config::AppConfig;
use std::path::{Path, PathBuf};

/// Resolve a configured base directory to an absolute path.
///
/// The root is `working_dir` when absolute, otherwise `working_dir` (or
/// nothing) joined onto `cwd`. `configured` is then resolved against that
/// single root, or used as-is when absolute. Fragments are never stitched
/// together piecemeal, so a base dir that repeats the working dir
/// (`.agent/breakdown/prompts` under `.agent/breakdown`) stays visible in
/// the result instead of being silently collapsed.
pub fn resolve_base_dir(configured: &str, working_dir: Option<&str>, cwd: &Path) -> PathBuf {
    let root = match working_dir.map(str::trim).filter(|w| !w.is_empty()) {
        Some(dir) => absolutize(Path::new(dir), cwd),
        None => absolutize(cwd, cwd),
    };
    absolutize(Path::new(configured), &root)
}

/// Absolute prompt and schema roots for one configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    pub prompt: PathBuf,
    pub schema: PathBuf,
}

impl BaseDirs {
    pub fn from_config(config: &AppConfig, cwd: &Path) -> Self {
        let working_dir = Some(config.working_dir.as_str());
        Self {
            prompt: resolve_base_dir(&config.app_prompt.base_dir, working_dir, cwd),
            schema: resolve_base_dir(&config.app_schema.base_dir, working_dir, cwd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_working_dir_and_base_dir() {
        let resolved = resolve_base_dir("prompts", Some(".agent/breakdown"), Path::new("/ws"));
        assert_eq!(resolved, PathBuf::from("/ws/.agent/breakdown/prompts"));
    }

    #[test]
    fn test_absolute_working_dir_ignores_cwd() {
        let resolved = resolve_base_dir("prompts", Some("/srv/ws"), Path::new("/home/me"));
        assert_eq!(resolved, PathBuf::from("/srv/ws/prompts"));
    }

    #[test]
    fn test_absolute_base_dir_used_as_is() {
        let resolved = resolve_base_dir("/opt/prompts", Some("/srv/ws"), Path::new("/ws"));
        assert_eq!(resolved, PathBuf::from("/opt/prompts"));
    }

    #[test]
    fn test_absent_working_dir_uses_cwd() {
        assert_eq!(
            resolve_base_dir("schema", None, Path::new("/ws")),
            PathBuf::from("/ws/schema")
        );
        assert_eq!(
            resolve_base_dir("schema", Some(""), Path::new("/ws")),
            PathBuf::from("/ws/schema")
        );
    }

    #[test]
    fn test_repeated_segments_are_not_collapsed() {
        let resolved = resolve_base_dir(
            ".agent/breakdown/prompts",
            Some(".agent/breakdown"),
            Path::new("/ws"),
        );
        assert_eq!(
            resolved,
            PathBuf::from("/ws/.agent/breakdown/.agent/breakdown/prompts")
        );
    }

    #[test]
    fn test_dot_prefixed_base_dir() {
        let resolved = resolve_base_dir("./prompts", Some("./.agent/breakdown"), Path::new("/ws"));
        assert_eq!(resolved, PathBuf::from("/ws/.agent/breakdown/prompts"));
    }

    #[test]
    fn test_base_dirs_from_default_config() {
        let dirs = BaseDirs::from_config(&AppConfig::default(), Path::new("/ws"));
        assert_eq!(dirs.prompt, PathBuf::from("/ws/.agent/breakdown/prompts"));
        assert_eq!(dirs.schema, PathBuf::from("/ws/.agent/breakdown/schema"));
    }
}
