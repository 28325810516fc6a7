//! Resolution orchestrator.

use super::request::ResolutionRequest;
use crate::config::AppConfig;
use crate::error::{BreakdownError, Result};
use crate::params::{Adaptation, Directive, Layer, TwoParamsPatterns};
use crate::paths::{
    BaseDirs, PathResolutionError, ResolvedPath, resolve_input_path, resolve_output_path,
    resolve_prompt_path, resolve_schema_path,
};
use crate::profile::ConfigProfile;
use crate::variables::{
    FILE_PATH_VARIABLE_NAMES, PromptVariable, STANDARD_VARIABLE_NAMES, VariablesBuilder, to_record,
};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Result of resolving one command.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Profile whose configuration was used.
    pub profile: String,
    pub directive: Directive,
    pub layer: Layer,
    /// Prompt template; always `Found` or `Fallback`.
    pub prompt: ResolvedPath,
    /// Schema file, when one exists (required with `use_schema`).
    pub schema: Option<ResolvedPath>,
    /// Explicit input file; `None` when input is piped.
    pub input: Option<PathBuf>,
    /// Output destination.
    pub output: PathBuf,
    /// Variables for the renderer, in insertion order.
    pub variables: Vec<PromptVariable>,
}

impl Resolution {
    pub fn prompt_path(&self) -> &Path {
        self.prompt.value()
    }

    /// Name -> value map for the renderer.
    pub fn to_record(&self) -> BTreeMap<String, String> {
        to_record(&self.variables)
    }
}

/// Resolve a request, loading the configuration for its profile from `request.cwd`.
pub fn resolve(request: &ResolutionRequest) -> Result<Resolution> {
    let profile = ConfigProfile::create(request.config_profile.as_deref())?;
    let config = AppConfig::load_for_profile(&request.cwd, &profile)?;
    info!("resolving '{} {}' with profile '{}'", request.directive, request.layer, profile);
    resolve_with_config(request, &profile, &config)
}

/// Resolve a request against an already loaded configuration.
///
/// # Returns
///
/// * `Ok(Resolution)` - All required paths and variables resolved
/// * `Err(BreakdownError::Validation)` - Directive, layer, `--input` or `--adaptation` rejected
/// * `Err(BreakdownError::PathResolution)` - Bad pattern config, missing base dir or template
/// * `Err(BreakdownError::Variables)` - Every rejected variable
pub fn resolve_with_config(
    request: &ResolutionRequest,
    profile: &ConfigProfile,
    config: &AppConfig,
) -> Result<Resolution> {
    let patterns = TwoParamsPatterns::from_config(config)?;

    let directive = Directive::create(&request.directive, &patterns)?;
    let layer = Layer::create(&request.layer, &patterns)?;
    let from_layer = request
        .from_layer
        .as_deref()
        .map(|raw| Layer::create(raw, &patterns))
        .transpose()?;
    let adaptation = request
        .adaptation
        .as_deref()
        .map(Adaptation::create)
        .transpose()?;

    let base_dirs = BaseDirs::from_config(config, &request.cwd);
    debug!(
        "prompt base {}, schema base {}",
        base_dirs.prompt.display(),
        base_dirs.schema.display()
    );

    let prompt = resolve_prompt_path(
        &base_dirs.prompt,
        &directive,
        &layer,
        adaptation.as_ref(),
        from_layer.as_ref(),
    )?;

    let schema = match resolve_schema_path(&base_dirs.schema, &directive, &layer) {
        Ok(resolved) => Some(resolved),
        Err(
            e @ (PathResolutionError::BaseDirectoryNotFound { .. }
            | PathResolutionError::TemplateNotFound { .. }),
        ) if !request.use_schema => {
            debug!("schema skipped: {}", e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    let input = resolve_input_path(request.from_file.as_deref(), &request.cwd);
    let output = resolve_output_path(request.destination.as_deref(), &layer, &request.cwd)?;

    let variables = build_variables(request, input.as_deref(), &output, schema.as_ref())?;

    Ok(Resolution {
        profile: profile.name().to_string(),
        directive,
        layer,
        prompt,
        schema,
        input,
        output,
        variables,
    })
}

fn build_variables(
    request: &ResolutionRequest,
    input: Option<&Path>,
    output: &Path,
    schema: Option<&ResolvedPath>,
) -> Result<Vec<PromptVariable>> {
    let [input_name, destination_name] = STANDARD_VARIABLE_NAMES;
    let [schema_name] = FILE_PATH_VARIABLE_NAMES;
    let mut builder = VariablesBuilder::new();

    if let Some(input) = input {
        builder.add_standard(input_name, &input.to_string_lossy());
    }
    builder.add_standard(destination_name, &output.to_string_lossy());

    if let Some(schema_path) = schema.and_then(ResolvedPath::path) {
        builder.add_file_path(schema_name, &schema_path.to_string_lossy());
    }

    if let Some(text) = &request.stdin {
        builder.add_stdin(text);
    }

    for (key, value) in &request.user_variables {
        builder.add_user(key.trim_start_matches('-'), value);
    }

    builder.build().map_err(BreakdownError::Variables)
}
