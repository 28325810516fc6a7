//! CLI argument parsing for breakdown.
//!
//! Uses clap derive macros for the fixed options. User variables
//! (`--uv-<name>=<value>`) have open-ended names, so they are split out of
//! argv before clap sees it.

use crate::error::{BreakdownError, Result};
use crate::resolution::ResolutionRequest;
use crate::variables::USER_VARIABLE_PREFIX;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Breakdown: turn a directive/layer command into a ready-to-use prompt.
///
/// Prompt templates are looked up under the configured prompt directory as
/// `{directive}/{layer}/f_{layer}.md`; the rendered prompt is printed to stdout.
#[derive(Parser, Debug)]
#[command(name = "breakdown")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "User variables: pass --uv-<name>=<value> to fill {uv-<name>} in templates.")]
pub struct Cli {
    /// Transformation to apply (e.g. to, summary, defect).
    pub directive: String,

    /// Target granularity (e.g. project, issue, task).
    pub layer: String,

    /// Input file. Use "-" or omit to read piped stdin.
    #[arg(short = 'f', long = "from", value_name = "FILE")]
    pub from: Option<String>,

    /// Output file or directory.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub destination: Option<String>,

    /// Layer used to pick the prompt template file name.
    #[arg(short = 'i', long = "input", value_name = "LAYER")]
    pub input: Option<String>,

    /// Prompt template variant (f_{layer}_{adaptation}.md).
    #[arg(short = 'a', long, value_name = "NAME")]
    pub adaptation: Option<String>,

    /// Configuration profile ({profile}-app.yml / {profile}-user.yml).
    #[arg(short = 'c', long = "config", value_name = "PROFILE")]
    pub config: Option<String>,

    /// Fail when the schema file for this directive/layer is missing.
    #[arg(long)]
    pub use_schema: bool,

    /// Print the resolved paths and variables as JSON instead of the prompt.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// `--uv-*` options, keyed by option name without the leading dashes.
    #[arg(skip)]
    pub user_variables: Vec<(String, String)>,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Exits with clap's usage message on malformed fixed options, like
    /// `Cli::parse()`.
    pub fn parse_args() -> Result<Self> {
        let (args, user_variables) = split_user_variables(std::env::args_os())?;
        let mut cli = Cli::parse_from(args);
        cli.user_variables = user_variables;
        Ok(cli)
    }

    /// Build a resolution request for this invocation.
    pub fn to_request(&self, cwd: PathBuf, stdin: Option<String>) -> ResolutionRequest {
        ResolutionRequest {
            directive: self.directive.clone(),
            layer: self.layer.clone(),
            from_file: self.from.clone(),
            destination: self.destination.clone(),
            from_layer: self.input.clone(),
            adaptation: self.adaptation.clone(),
            config_profile: self.config.clone(),
            use_schema: self.use_schema,
            stdin,
            user_variables: self.user_variables.clone(),
            cwd,
        }
    }
}

/// Separate `--uv-<name>=<value>` arguments from the rest of argv.
///
/// Returned keys drop the leading `--` (`uv-company`). Arguments after a
/// bare `--` are never treated as user variables. Non-UTF-8 arguments are
/// passed through for clap to judge.
pub fn split_user_variables<I>(args: I) -> Result<(Vec<OsString>, Vec<(String, String)>)>
where
    I: IntoIterator<Item = OsString>,
{
    let flag_prefix = format!("--{}", USER_VARIABLE_PREFIX);
    let mut rest = Vec::new();
    let mut user_variables = Vec::new();
    let mut options_ended = false;

    for arg in args {
        let user_flag = arg
            .to_str()
            .filter(|s| !options_ended && s.starts_with(&flag_prefix));
        let Some(flag) = user_flag else {
            options_ended |= arg == "--";
            rest.push(arg);
            continue;
        };

        let Some((key, value)) = flag[2..].split_once('=') else {
            return Err(BreakdownError::UserError(format!(
                "user variable '{}' needs a value: use {}=<value>",
                flag, flag
            )));
        };
        user_variables.push((key.to_string(), value.to_string()));
    }

    Ok((rest, user_variables))
}
