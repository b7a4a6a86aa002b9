//! Optional type-resolution capability supplied by embedding hosts.
//!
//! The CLI runs without type information and rules fall back to lexical
//! heuristics. A host that owns a fully-checked program (an editor bridge,
//! a tsserver sidecar, a test harness) can implement [`TypeResolver`] to let
//! rules classify receivers by their resolved types instead.

use tree_sitter::Node;

/// The resolved static type of a syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Name of the type's originating symbol (e.g., `Store`).
    pub symbol: String,
    /// Name of the symbol's enclosing declaration or module
    /// (e.g., `"effector"`, `"@effector/babel-plugin"`).
    pub declared_in: Option<String>,
}

impl ResolvedType {
    /// Creates a resolved type with an enclosing declaration name.
    #[must_use]
    pub fn new(symbol: impl Into<String>, declared_in: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            declared_in: Some(declared_in.into()),
        }
    }

    /// Creates a resolved type whose symbol has no enclosing declaration.
    #[must_use]
    pub fn orphan(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            declared_in: None,
        }
    }
}

/// Maps syntax nodes to their resolved types.
///
/// Implementations must be total: a node whose type cannot be determined
/// resolves to `None`, never an error. Rules treat `None` as "unknown" and
/// fail closed.
pub trait TypeResolver: Send + Sync {
    /// Resolves the static type of `node` within `source`.
    fn resolve(&self, node: Node<'_>, source: &str) -> Option<ResolvedType>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_type_constructors() {
        let t = ResolvedType::new("Store", "effector");
        assert_eq!(t.symbol, "Store");
        assert_eq!(t.declared_in.as_deref(), Some("effector"));

        let o = ResolvedType::orphan("Store");
        assert!(o.declared_in.is_none());
    }
}
