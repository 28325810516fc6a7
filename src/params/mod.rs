//! Validated command parameters.
//!
//! A command is a directive/layer pair such as `to project`. Both halves are
//! checked against the profile's pattern source before any path is computed:
//!
//! - **Pattern**: an anchored regex plus its source text for diagnostics
//! - **PatternSource**: supplies the directive and layer patterns for a profile
//! - **Directive / Layer / Adaptation**: immutable values with smart constructors
//!
//! There is no way to build a `Directive` or `Layer` other than through
//! `create`, so every downstream resolver can rely on the values being valid.

mod pattern;
mod types;


pub use pattern::{Pattern, PatternSource, TwoParamsPatterns};
pub use types::{Adaptation, Directive, Layer, MAX_VALUE_LENGTH, ValidationError, ValueKind};
