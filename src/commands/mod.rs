//! Command execution for breakdown.
//!
//! Turns parsed CLI arguments into a resolution, then either renders the
//! prompt template or dumps the resolution as JSON.

use crate::cli::Cli;
use crate::error::{BreakdownError, Result};
use crate::paths::STDIN_MARKER;
use crate::render::render_template;
use crate::resolution::{Resolution, ResolutionRequest, resolve};
use log::{debug, info};
use std::fs;
use std::io::{self, IsTerminal, Read};

/// Dispatch a parsed command line.
///
/// Writes the rendered prompt (or the JSON resolution) to stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let stdin = if reads_stdin(&cli) { read_piped_stdin()? } else { None };
    let request = build_request(&cli, stdin)?;
    let output = execute(&request, cli.json)?;
    println!("{}", output);
    Ok(())
}

/// Build a request rooted at the current working directory.
pub(crate) fn build_request(cli: &Cli, stdin: Option<String>) -> Result<ResolutionRequest> {
    let cwd = std::env::current_dir().map_err(|e| {
        BreakdownError::UserError(format!("cannot determine current directory: {}", e))
    })?;
    Ok(cli.to_request(cwd, stdin))
}

/// Resolve a request and produce what should be printed.
pub fn execute(request: &ResolutionRequest, json: bool) -> Result<String> {
    let resolution = resolve(request)?;

    if json {
        return serde_json::to_string_pretty(&resolution)
            .map_err(|e| BreakdownError::UserError(format!("failed to serialize resolution: {}", e)));
    }

    render_prompt(&resolution)
}

/// Read the resolved template and substitute the resolution's variables.
pub fn render_prompt(resolution: &Resolution) -> Result<String> {
    let path = resolution.prompt_path();
    info!("rendering {}", path.display());

    let template = fs::read_to_string(path).map_err(|source| BreakdownError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(render_template(&template, &resolution.to_record())?)
}

fn reads_stdin(cli: &Cli) -> bool {
    let from_stdin = match cli.from.as_deref() {
        None => true,
        Some(from) => from.trim().is_empty() || from == STDIN_MARKER,
    };
    from_stdin && !io::stdin().is_terminal()
}

fn read_piped_stdin() -> Result<Option<String>> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| BreakdownError::UserError(format!("failed to read stdin: {}", e)))?;
    debug!("read {} bytes from stdin", text.len());
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::DirGuard;
    use clap::Parser;
    use serial_test::serial;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn workspace() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(
            &temp
                .path()
                .join(".agent/breakdown/prompts/to/project/f_project.md"),
            "Write to {destination_path}.\n{input_text}\nBy {uv-company}. Literal {{x}}.",
        );
        temp
    }

    fn request(temp: &TempDir) -> ResolutionRequest {
        let mut request = ResolutionRequest::new("to", "project", temp.path());
        request.destination = Some("plan.md".to_string());
        request.stdin = Some("piped body".to_string());
        request.user_variables = vec![("uv-company".to_string(), "ACME".to_string())];
        request
    }

    #[test]
    fn execute_renders_template() {
        let temp = workspace();
        let output = execute(&request(&temp), false).unwrap();

        let destination = temp.path().join("project").join("plan.md");
        assert_eq!(
            output,
            format!(
                "Write to {}.\npiped body\nBy ACME. Literal {{x}}.",
                destination.display()
            )
        );
    }

    #[test]
    fn execute_json_dumps_resolution() {
        let temp = workspace();
        let output = execute(&request(&temp), true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["directive"], "to");
        assert_eq!(value["layer"], "project");
        assert_eq!(value["profile"], "default");
        assert_eq!(value["prompt"]["status"], "found");
        assert!(value["variables"].as_array().unwrap().len() >= 3);
    }

    #[test]
    fn execute_reports_undefined_placeholder_as_render_failure() {
        let temp = workspace();
        let mut req = request(&temp);
        req.user_variables.clear();

        let err = execute(&req, false).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::RENDER_FAILURE);
        assert!(err.to_string().contains("uv-company"));
    }

    #[test]
    fn execute_reports_missing_template_as_resolution_failure() {
        let temp = workspace();
        let mut req = request(&temp);
        req.directive = "summary".to_string();

        let err = execute(&req, false).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
    }

    #[test]
    #[serial]
    fn build_request_uses_current_directory() {
        let temp = workspace();
        let _guard = DirGuard::new(temp.path());
        let cli = Cli::try_parse_from(["breakdown", "to", "project", "-o", "plan.md"]).unwrap();

        let req = build_request(&cli, None).unwrap();
        assert_eq!(
            req.cwd.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );

        let resolution = resolve(&req).unwrap();
        assert!(resolution.prompt_path().ends_with("to/project/f_project.md"));
    }
}
