//! Configuration profile selection.
//!
//! A profile names the configuration file set to load
//! (`{profile}-app.yml` / `{profile}-user.yml`). It is passed explicitly
//! through every resolution call; there is no process-wide "current profile".

use std::fmt;
use thiserror::Error;

/// Name of the profile used when `--config` is absent or empty.
pub const DEFAULT_PROFILE: &str = "default";

/// Maximum accepted profile identifier length.
pub const MAX_PROFILE_LENGTH: usize = 64;

/// Error for rejected profile identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigProfileError {
    #[error(
        "invalid config profile '{0}': use letters, digits, '-' or '_' (at most {MAX_PROFILE_LENGTH} characters)"
    )]
    InvalidIdentifier(String),
}

/// A validated configuration profile name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigProfile(String);

impl ConfigProfile {
    /// Create a profile from an optional CLI value.
    ///
    /// Absent or blank input yields the default profile. Anything else is
    /// trimmed and must be a plain identifier.
    pub fn create(raw: Option<&str>) -> Result<Self, ConfigProfileError> {
        let trimmed = match raw.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(s) => s,
        };

        let valid_chars = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid_chars || trimmed.len() > MAX_PROFILE_LENGTH {
            return Err(ConfigProfileError::InvalidIdentifier(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_PROFILE
    }

    /// File name of the application config for this profile.
    pub fn app_config_file(&self) -> String {
        format!("{}-app.yml", self.0)
    }

    /// File name of the user override config for this profile.
    pub fn user_config_file(&self) -> String {
        format!("{}-user.yml", self.0)
    }
}

impl Default for ConfigProfile {
    fn default() -> Self {
        Self(DEFAULT_PROFILE.to_string())
    }
}

impl fmt::Display for ConfigProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
