//! Breakdown: resolve `breakdown <directive> <layer>` commands into prompt
//! template paths, schema/input/output paths and template variables, then
//! render the prompt.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod params;
pub mod paths;
pub mod profile;
pub mod render;
pub mod resolution;
pub mod variables;

#[cfg(test)]
mod test_support;
