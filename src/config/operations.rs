//! Config discovery, merging, loading and validation.

use super::model::AppConfig;
use super::types::CONFIG_DIR;
use crate::error::{BreakdownError, Result};
use crate::profile::ConfigProfile;
use log::debug;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load the configuration for a profile.
    ///
    /// Looks for `{cwd}/.agent/breakdown/config/{profile}-app.yml` and
    /// `{profile}-user.yml`. Each file is optional; the user file is merged
    /// over the app file, and built-in defaults fill whatever neither sets.
    ///
    /// # Returns
    ///
    /// * `Ok(AppConfig)` - Merged and validated config
    /// * `Err(BreakdownError::Config)` - Unreadable file, bad YAML, or invalid values
    pub fn load_for_profile<P: AsRef<Path>>(cwd: P, profile: &ConfigProfile) -> Result<Self> {
        let dir = config_dir(cwd);
        let app_path = dir.join(profile.app_config_file());
        let user_path = dir.join(profile.user_config_file());

        let mut merged = Value::Null;
        for path in [&app_path, &user_path] {
            match read_optional(path)? {
                Some(content) => {
                    debug!("loading config layer {}", path.display());
                    let layer: Value = serde_yaml::from_str(&content).map_err(|e| {
                        BreakdownError::Config(format!(
                            "failed to parse '{}': {}",
                            path.display(),
                            e
                        ))
                    })?;
                    merge_values(&mut merged, layer);
                }
                None => debug!("config layer {} not present", path.display()),
            }
        }

        Self::from_value(merged)
    }

    /// Load config from a single YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BreakdownError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| BreakdownError::Config(format!("failed to parse config YAML: {}", e)))?;

        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self> {
        let config = if value.is_null() {
            AppConfig::default()
        } else {
            serde_yaml::from_value(value)
                .map_err(|e| BreakdownError::Config(format!("invalid config: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BreakdownError::Config(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `working_dir`, `app_prompt.base_dir` and `app_schema.base_dir` must be non-empty
    /// - `params.two.directive.pattern` and `params.two.layer.pattern` must be non-empty
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("working_dir", &self.working_dir),
            ("app_prompt.base_dir", &self.app_prompt.base_dir),
            ("app_schema.base_dir", &self.app_schema.base_dir),
            ("params.two.directive.pattern", &self.params.two.directive.pattern),
            ("params.two.layer.pattern", &self.params.two.layer.pattern),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(BreakdownError::Config(format!(
                    "config validation failed: {} must not be empty",
                    key
                )));
            }
        }

        Ok(())
    }
}

/// Directory holding profile config files for an invocation directory.
pub fn config_dir<P: AsRef<Path>>(cwd: P) -> PathBuf {
    cwd.as_ref().join(CONFIG_DIR)
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(BreakdownError::Config(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Merge `overlay` into `base`: mappings merge key-wise, anything else replaces.
/// A null overlay (empty file) leaves `base` untouched.
pub(crate) fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
