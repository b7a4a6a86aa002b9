//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::SyntaxTree;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a parsed JS/TS syntax tree.
///
/// Implement this trait to create rules that analyze individual source files.
/// Rules receive the parsed tree and walk it with the helpers in
/// [`crate::syntax`].
///
/// # Example
///
/// ```ignore
/// use effector_lint_core::{Rule, FileContext, SyntaxTree, Violation};
/// use effector_lint_core::syntax::each_node;
///
/// pub struct NoDebugger;
///
/// impl Rule for NoDebugger {
///     fn name(&self) -> &'static str { "no-debugger" }
///     fn code(&self) -> &'static str { "EF999" }
///
///     fn check(&self, ctx: &FileContext, ast: &SyntaxTree) -> Vec<Violation> {
///         let mut violations = Vec::new();
///         each_node(ast.root(), &mut |node| {
///             if node.kind() == "debugger_statement" { /* ... */ }
///         });
///         violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-getstate").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "EF001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    /// Override this to customize the requirement.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `ast` - The parsed syntax tree of the file
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, ast: &SyntaxTree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Dialect;
    use crate::types::Location;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext, _ast: &SyntaxTree) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::new(ctx.path.to_path_buf(), 1, 1),
                "Test violation",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.requires_allow_reason());
    }

    #[test]
    fn test_rule_check() {
        let rule = TestRule;
        let source = "const a = 1;";
        let ast = SyntaxTree::parse(source, Dialect::JavaScript).expect("parse failed");
        let ctx = FileContext::new(Path::new("a.js"), source, Path::new("."));
        let violations = rule.check(&ctx, &ast);
        assert_eq!(violations.len(), 1);
    }
}
