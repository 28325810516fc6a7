//! Tests for config functionality.

use super::operations::merge_values;
use crate::config::types::{DEFAULT_DIRECTIVE_PATTERN, DEFAULT_LAYER_PATTERN};
use crate::config::{AppConfig, config_dir};
use crate::profile::ConfigProfile;
use std::fs;
use tempfile::TempDir;

fn write_config(root: &TempDir, file: &str, content: &str) {
    let dir = config_dir(root.path());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(config.working_dir, ".agent/breakdown");
    assert_eq!(config.app_prompt.base_dir, "prompts");
    assert_eq!(config.app_schema.base_dir, "schema");
    assert_eq!(config.params.two.directive.pattern, DEFAULT_DIRECTIVE_PATTERN);
    assert_eq!(config.params.two.layer.pattern, DEFAULT_LAYER_PATTERN);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = AppConfig::from_yaml("").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
working_dir: /srv/ws
app_prompt:
  base_dir: templates
"#;
    let config = AppConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.working_dir, "/srv/ws");
    assert_eq!(config.app_prompt.base_dir, "templates");

    // Unspecified values should use defaults
    assert_eq!(config.app_schema.base_dir, "schema");
    assert_eq!(config.params.two.layer.pattern, DEFAULT_LAYER_PATTERN);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
working_dir: work
app_prompt:
  base_dir: p
app_schema:
  base_dir: s
params:
  two:
    directive:
      pattern: "find|to"
    layer:
      pattern: "bugs|task"
"#;
    let config = AppConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.working_dir, "work");
    assert_eq!(config.app_prompt.base_dir, "p");
    assert_eq!(config.app_schema.base_dir, "s");
    assert_eq!(config.params.two.directive.pattern, "find|to");
    assert_eq!(config.params.two.layer.pattern, "bugs|task");
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
working_dir: ws
unknown_field: "some value"
app_prompt:
  base_dir: prompts
  extra: true
"#;
    let config = AppConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.working_dir, "ws");
}

#[test]
fn test_validate_empty_base_dir() {
    let yaml = r#"
app_schema:
  base_dir: ""
"#;
    let err = AppConfig::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("app_schema.base_dir"));
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn test_validate_empty_pattern() {
    let yaml = r#"
params:
  two:
    layer:
      pattern: "  "
"#;
    let err = AppConfig::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("params.two.layer.pattern"));
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = AppConfig::from_yaml("working_dir: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_to_yaml_reparses() {
    let config = AppConfig::default();
    let yaml = config.to_yaml().unwrap();
    assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let err = AppConfig::load("/nonexistent/path/default-app.yml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

// =========================================================================
// Profile discovery and merging
// =========================================================================

#[test]
fn test_load_for_profile_without_files_uses_defaults() {
    let root = TempDir::new().unwrap();
    let config = AppConfig::load_for_profile(root.path(), &ConfigProfile::default()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_user_file_overrides_app_file() {
    let root = TempDir::new().unwrap();
    write_config(
        &root,
        "default-app.yml",
        r#"
working_dir: app-ws
app_prompt:
  base_dir: app-prompts
app_schema:
  base_dir: app-schema
"#,
    );
    write_config(
        &root,
        "default-user.yml",
        r#"
app_prompt:
  base_dir: user-prompts
"#,
    );

    let config = AppConfig::load_for_profile(root.path(), &ConfigProfile::default()).unwrap();
    assert_eq!(config.working_dir, "app-ws");
    assert_eq!(config.app_prompt.base_dir, "user-prompts");
    assert_eq!(config.app_schema.base_dir, "app-schema");
}

#[test]
fn test_profile_selects_file_set() {
    let root = TempDir::new().unwrap();
    write_config(&root, "default-app.yml", "working_dir: default-ws\n");
    write_config(&root, "prod-app.yml", "working_dir: prod-ws\n");

    let prod = ConfigProfile::create(Some("prod")).unwrap();
    let config = AppConfig::load_for_profile(root.path(), &prod).unwrap();
    assert_eq!(config.working_dir, "prod-ws");
}

#[test]
fn test_empty_user_file_keeps_app_values() {
    let root = TempDir::new().unwrap();
    write_config(&root, "default-app.yml", "working_dir: app-ws\n");
    write_config(&root, "default-user.yml", "");

    let config = AppConfig::load_for_profile(root.path(), &ConfigProfile::default()).unwrap();
    assert_eq!(config.working_dir, "app-ws");
}

#[test]
fn test_malformed_profile_file_names_the_file() {
    let root = TempDir::new().unwrap();
    write_config(&root, "default-user.yml", "params: [oops");

    let err = AppConfig::load_for_profile(root.path(), &ConfigProfile::default()).unwrap_err();
    assert!(err.to_string().contains("default-user.yml"));
}

#[test]
fn test_merge_replaces_sequences_and_scalars() {
    let mut base: serde_yaml::Value = serde_yaml::from_str("a: [1, 2]\nb: x\nc: {d: 1}").unwrap();
    let overlay: serde_yaml::Value = serde_yaml::from_str("a: [3]\nc: {e: 2}").unwrap();
    merge_values(&mut base, overlay);

    let expected: serde_yaml::Value =
        serde_yaml::from_str("a: [3]\nb: x\nc: {d: 1, e: 2}").unwrap();
    assert_eq!(base, expected);
}
