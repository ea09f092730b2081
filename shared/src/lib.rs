//! Shared types for the coin exclusion tooling
//!
//! Holds the symbol conventions (quote suffix, base ticker normalization)
//! and the tracing setup used by every binary in the workspace.

pub mod types;
pub mod logging;

pub use types::*;
