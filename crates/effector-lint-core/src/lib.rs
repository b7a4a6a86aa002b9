//! # effector-lint-core
//!
//! Core framework for linting effector codebases.
//!
//! This crate provides the foundational traits and types for building
//! JS/TS lint rules on top of tree-sitter. It includes:
//!
//! - [`Rule`] trait for per-file AST-based rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//! - [`syntax`] for parsing and walking JS/TS sources
//! - [`TypeResolver`] for hosts that can supply full type information
//!
//! ## Example
//!
//! ```ignore
//! use effector_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// Comment-based allowance directives.
pub mod allowance;
/// Tree-sitter parsing and traversal for JS/TS.
pub mod syntax;
/// Optional type-resolution capability.
pub mod typeinfo;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use syntax::{Dialect, SyntaxTree};
pub use typeinfo::{ResolvedType, TypeResolver};
pub use types::{LintResult, Location, Severity, Suggestion, Violation};
