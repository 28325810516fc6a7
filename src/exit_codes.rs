//! Exit code constants for the breakdown CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid config)
//! - 2: Validation failure (directive, layer, adaptation, profile)
//! - 3: Path resolution failure (missing base dir or template)
//! - 4: Variable assembly failure
//! - 5: Template render failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or broken configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: directive/layer/adaptation/profile rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// Path resolution failure: base directory or template not found.
pub const RESOLUTION_FAILURE: i32 = 3;

/// Variable assembly failure: one or more prompt variables were rejected.
pub const VARIABLE_FAILURE: i32 = 4;

/// Template render failure: the prompt template referenced an unknown variable.
pub const RENDER_FAILURE: i32 = 5;
