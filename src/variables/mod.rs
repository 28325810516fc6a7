//! Prompt variables handed to the template renderer.
//!
//! Four kinds of variable exist, each with its own naming rule:
//!
//! | Kind       | Names                                   |
//! |------------|-----------------------------------------|
//! | Standard   | `input_text_file`, `destination_path`   |
//! | FilePath   | `schema_file`                           |
//! | Stdin      | `input_text` (fixed)                    |
//! | User       | anything starting with `uv-`            |
//!
//! `VariablesBuilder` validates every addition but keeps going after a
//! failure, so all problems are reported together.

mod builder;
mod types;


pub use builder::VariablesBuilder;
pub use types::{
    BuilderError, FILE_PATH_VARIABLE_NAMES, PromptVariable, STANDARD_VARIABLE_NAMES,
    STDIN_VARIABLE_NAME, USER_VARIABLE_PREFIX, VariableKind, to_record,
};
