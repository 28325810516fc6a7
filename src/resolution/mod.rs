//! Command resolution: from a parsed command to concrete paths and variables.
//!
//! The orchestrator runs, in order:
//!
//! 1. Profile selection and config loading
//! 2. Directive / layer / `--input` / `--adaptation` validation
//! 3. Prompt, schema, input and output path resolution
//! 4. Variable assembly
//!
//! Steps 1-3 stop at the first error. Step 4 reports every rejected
//! variable at once. Each call works on its own config snapshot and shares
//! nothing with other calls.

mod orchestrator;
mod request;


pub use orchestrator::{Resolution, resolve, resolve_with_config};
pub use request::ResolutionRequest;
