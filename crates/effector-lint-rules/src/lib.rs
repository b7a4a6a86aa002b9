//! # effector-lint-rules
//!
//! Built-in lint rules for effector-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | EF001 | `no-getstate` | Forbids `.getState()` calls on effector stores |
//!
//! ## Usage
//!
//! ```ignore
//! use effector_lint_core::Analyzer;
//! use effector_lint_rules::NoGetState;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(NoGetState::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_get_state;

pub use no_get_state::NoGetState;

/// Re-export core types for convenience.
pub use effector_lint_core::{Rule, RuleBox, Severity, Violation};

/// Returns the recommended set of rules.
///
/// Includes:
/// - `no-getstate` (EF001) - Forbids `.getState()` on stores
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![Box::new(NoGetState::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NoGetState::new())]
}
