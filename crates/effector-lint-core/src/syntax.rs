//! Tree-sitter parsing for JavaScript and TypeScript sources.
//!
//! Rules receive a [`SyntaxTree`] and walk its nodes directly; this module
//! only owns grammar selection, parsing, and traversal helpers.

use std::path::Path;
use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree};

/// Source dialect, selected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain JavaScript (the grammar also covers JSX).
    JavaScript,
    /// TypeScript.
    TypeScript,
    /// TypeScript with JSX.
    Tsx,
}

/// File extensions handled by the analyzer, dot included.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".mjs", ".cjs", ".ts", ".mts", ".cts", ".tsx",
];

impl Dialect {
    /// Picks the dialect for a file path, or `None` for unsupported files.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    fn language(self) -> Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Errors from parsing a source file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {dialect:?} grammar: {source}")]
    Grammar {
        /// Dialect whose grammar failed to load.
        dialect: Dialect,
        /// Underlying tree-sitter error.
        source: tree_sitter::LanguageError,
    },
    /// The parser produced no tree.
    #[error("parser produced no tree for {dialect:?} input")]
    Failed {
        /// Dialect that was being parsed.
        dialect: Dialect,
    },
}

/// A parsed source file.
///
/// Tree-sitter is error-tolerant: a tree is produced even for sources with
/// syntax errors, and rules simply see fewer well-formed nodes. That matches
/// the fail-silent contract of this linter.
pub struct SyntaxTree {
    dialect: Dialect,
    tree: Tree,
}

impl SyntaxTree {
    /// Parses source text under the given dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser
    /// produces no tree.
    pub fn parse(source: &str, dialect: Dialect) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&dialect.language())
            .map_err(|source| ParseError::Grammar { dialect, source })?;

        let tree = parser
            .parse(source, None)
            .ok_or(ParseError::Failed { dialect })?;

        Ok(Self { dialect, tree })
    }

    /// Returns the dialect this tree was parsed under.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the root node of the tree.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

/// Returns the source text covered by a node.
#[must_use]
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Visits every node under `root` in preorder.
pub fn each_node<'t, F: FnMut(Node<'t>)>(root: Node<'t>, f: &mut F) {
    let mut cursor = root.walk();
    loop {
        f(cursor.node());

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of(source: &str, dialect: Dialect, kind: &str) -> usize {
        let tree = SyntaxTree::parse(source, dialect).expect("parse failed");
        let mut count = 0;
        each_node(tree.root(), &mut |node| {
            if node.kind() == kind {
                count += 1;
            }
        });
        count
    }

    #[test]
    fn dialect_from_extension() {
        assert_eq!(
            Dialect::from_path(Path::new("a.js")),
            Some(Dialect::JavaScript)
        );
        assert_eq!(
            Dialect::from_path(Path::new("a.mjs")),
            Some(Dialect::JavaScript)
        );
        assert_eq!(
            Dialect::from_path(Path::new("a.ts")),
            Some(Dialect::TypeScript)
        );
        assert_eq!(Dialect::from_path(Path::new("a.tsx")), Some(Dialect::Tsx));
        assert_eq!(Dialect::from_path(Path::new("a.rs")), None);
        assert_eq!(Dialect::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn finds_call_expressions() {
        let src = "foo();\nbar.baz();\n";
        assert_eq!(kinds_of(src, Dialect::JavaScript, "call_expression"), 2);
    }

    #[test]
    fn typescript_annotations_parse() {
        let src = "const $user: Store<User> = createStore(null);\n$user.getState();\n";
        assert_eq!(kinds_of(src, Dialect::TypeScript, "call_expression"), 2);
    }

    #[test]
    fn node_text_roundtrip() {
        let src = "$user.getState();";
        let tree = SyntaxTree::parse(src, Dialect::JavaScript).expect("parse failed");
        let mut found = false;
        each_node(tree.root(), &mut |node| {
            if node.kind() == "member_expression" {
                assert_eq!(node_text(node, src), "$user.getState");
                found = true;
            }
        });
        assert!(found);
    }

    #[test]
    fn broken_source_still_yields_tree() {
        let tree = SyntaxTree::parse("const = ;;;", Dialect::JavaScript);
        assert!(tree.is_ok());
    }
}
