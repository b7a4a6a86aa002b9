//! Rule to forbid `.getState()` calls on effector stores.
//!
//! # Rationale
//!
//! `.getState()` reads a store imperatively, outside the derivation system.
//! The value observed depends on when the read happens relative to pending
//! updates, which invites race conditions. `sample`/`guard` read stores at
//! well-defined points and are the safe replacement.
//!
//! # Detection
//!
//! A call site is flagged when its method name is exactly `getState` and the
//! receiver is classified as a store. With a [`TypeResolver`] available,
//! classification uses the receiver's resolved type (symbol `Store` declared
//! in an `effector` package). Without one, it falls back to the `$`-prefix
//! naming convention. The fallback knowingly misses aliased stores and can
//! match non-stores that happen to use the prefix; an inconclusive receiver
//! is never flagged.
//!
//! # Suppression
//!
//! - `// effector-lint: allow(no-getstate) reason="..."` comment

use std::sync::Arc;

use effector_lint_core::allowance::check_allow_with_reason;
use effector_lint_core::syntax::{each_node, node_text, SyntaxTree};
use effector_lint_core::{
    FileContext, Location, Rule, Severity, Suggestion, TypeResolver, Violation,
};
use tree_sitter::Node;

/// Rule code for no-getstate.
pub const CODE: &str = "EF001";

/// Rule name for no-getstate.
pub const NAME: &str = "no-getstate";

/// Method name that triggers the check. Exact, case-sensitive.
const METHOD_NAME: &str = "getState";

/// Symbol name an effector store type resolves to.
const STORE_SYMBOL: &str = "Store";

/// Substring required in the symbol's enclosing declaration name.
/// A substring, not an exact match, so scoped-package variants
/// (`@effector/...`) still qualify.
const STORE_PACKAGE_MARKER: &str = "effector";

/// Naming-convention prefix for store bindings.
const STORE_NAME_PREFIX: char = '$';

/// Forbids `.getState()` calls on any effector store.
#[derive(Clone)]
pub struct NoGetState {
    /// Custom severity.
    severity: Severity,
    /// Type-resolution capability, when the host has one.
    resolver: Option<Arc<dyn TypeResolver>>,
}

impl std::fmt::Debug for NoGetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoGetState")
            .field("severity", &self.severity)
            .field("has_type_info", &self.resolver.is_some())
            .finish()
    }
}

impl Default for NoGetState {
    fn default() -> Self {
        Self::new()
    }
}

impl NoGetState {
    /// Creates a new rule using the naming-convention fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            resolver: None,
        }
    }

    /// Supplies a type-resolution capability, switching the classifier to
    /// the type-based strategy for the whole run.
    #[must_use]
    pub fn with_type_resolver(mut self, resolver: Arc<dyn TypeResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_call(
        &self,
        call: Node<'_>,
        ctx: &FileContext,
        classifier: &StoreClassifier<'_>,
    ) -> Option<Violation> {
        // Fast-reject on the method name before any receiver work.
        let callee = call.child_by_field_name("function")?;
        if callee.kind() != "member_expression" {
            return None;
        }
        let method = callee.child_by_field_name("property")?;
        if node_text(method, ctx.content) != METHOD_NAME {
            return None;
        }

        let receiver = callee.child_by_field_name("object")?;
        let target = resolve_receiver(receiver)?;
        let store_name = identifier_name(target, ctx.content)?;

        if !classifier.is_store(target, store_name, ctx.content) {
            return None;
        }

        let line = call.start_position().row + 1;
        let column = call.start_position().column + 1;

        let allow_check = check_allow_with_reason(ctx.content, line, NAME);
        if allow_check.is_allowed() {
            if self.requires_allow_reason() && allow_check.reason().is_none() {
                let location = Location::new(ctx.relative_path.clone(), line, column);
                return Some(
                    Violation::new(
                        CODE,
                        NAME,
                        Severity::Warning,
                        location,
                        format!("Allow directive for '{NAME}' is missing required reason"),
                    )
                    .with_suggestion(Suggestion::new(
                        "Add reason=\"...\" to explain why this exception is necessary",
                    )),
                );
            }
            return None;
        }

        let location = Location::new(ctx.relative_path.clone(), line, column)
            .with_span(call.start_byte(), call.end_byte() - call.start_byte());

        Some(
            Violation::new(
                CODE,
                NAME,
                self.severity,
                location,
                format!(
                    "Method `.getState` called on store `{store_name}` can lead to race conditions. \
                     Replace it with `sample` or `guard`."
                ),
            )
            .with_suggestion(Suggestion::new(
                "Read the store at a well-defined point with `sample` or `guard`",
            )),
        )
    }
}

impl Rule for NoGetState {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids .getState() calls on effector stores"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, ast: &SyntaxTree) -> Vec<Violation> {
        // Strategy is fixed for the whole run by capability presence,
        // not re-decided per call-site.
        let classifier = match &self.resolver {
            Some(resolver) => StoreClassifier::TypeBased(resolver.as_ref()),
            None => StoreClassifier::NameBased,
        };

        let mut violations = Vec::new();
        each_node(ast.root(), &mut |node| {
            if node.kind() != "call_expression" {
                return;
            }
            if let Some(violation) = self.check_call(node, ctx, &classifier) {
                violations.push(violation);
            }
        });
        violations
    }
}

/// Resolves a receiver expression to its terminal node.
///
/// A nested member access recurses into its *property*, so `a.b` resolves
/// to `b` and `a.b.c` to `c`: the accessor nearest the call gets blamed,
/// not the chain root. Computed access (`obj[x]`) is a subscript node, not
/// a member access, and stops the walk.
fn resolve_receiver(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node;
    while current.kind() == "member_expression" {
        current = current.child_by_field_name("property")?;
    }
    Some(current)
}

/// Returns the name of an identifier-like node, or `None` for nodes with
/// no static name (`this`, subscripts, literals, parenthesized expressions).
fn identifier_name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    match node.kind() {
        "identifier" | "property_identifier" | "private_property_identifier" => {
            Some(node_text(node, source))
        }
        _ => None,
    }
}

/// Store classification strategy, selected once per analysis run.
enum StoreClassifier<'a> {
    /// Full type information is available: classify by resolved type.
    TypeBased(&'a dyn TypeResolver),
    /// Syntax-only analysis: classify by the `$` naming convention.
    NameBased,
}

impl StoreClassifier<'_> {
    /// Decides whether the resolved receiver denotes a store.
    ///
    /// Never errors: a missing type, missing symbol, or missing enclosing
    /// declaration classifies as "not a store".
    fn is_store(&self, node: Node<'_>, name: &str, source: &str) -> bool {
        match self {
            Self::TypeBased(resolver) => resolver.resolve(node, source).is_some_and(|ty| {
                ty.symbol == STORE_SYMBOL
                    && ty
                        .declared_in
                        .is_some_and(|origin| origin.contains(STORE_PACKAGE_MARKER))
            }),
            Self::NameBased => name.starts_with(STORE_NAME_PREFIX),
        }
    }
}
