//! Integration test: analyzer end-to-end over a temporary project tree.
//!
//! Uses a throwaway rule that flags every call expression to verify
//! discovery, exclusion, config toggles, and result ordering without
//! depending on any real rule crate.

use effector_lint_core::syntax::each_node;
use effector_lint_core::{
    Analyzer, Config, FileContext, Location, Rule, Severity, SyntaxTree, Violation,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Flags every call expression it sees.
struct FlagAllCalls;

impl Rule for FlagAllCalls {
    fn name(&self) -> &'static str {
        "flag-all-calls"
    }

    fn code(&self) -> &'static str {
        "TEST001"
    }

    fn check(&self, ctx: &FileContext, ast: &SyntaxTree) -> Vec<Violation> {
        let mut violations = Vec::new();
        each_node(ast.root(), &mut |node| {
            if node.kind() == "call_expression" {
                violations.push(Violation::new(
                    self.code(),
                    self.name(),
                    self.default_severity(),
                    Location::new(
                        ctx.relative_path.clone(),
                        node.start_position().row + 1,
                        node.start_position().column + 1,
                    ),
                    "call expression",
                ));
            }
        });
        violations
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("fixture dir should create");
    }
    fs::write(path, content).expect("fixture file should write");
}

#[test]
fn discovers_and_checks_js_and_ts_files() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/a.js", "foo();\n");
    write(tmp.path(), "src/b.ts", "bar();\nbaz();\n");
    write(tmp.path(), "README.md", "not source();\n");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(FlagAllCalls)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 3);
}

#[test]
fn node_modules_is_excluded_by_default() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/app.js", "run();\n");
    write(tmp.path(), "node_modules/effector/index.js", "hidden();\n");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(FlagAllCalls)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn disabled_rule_produces_no_violations() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/app.js", "run();\n");

    let config = Config::parse("[rules.flag-all-calls]\nenabled = false\n")
        .expect("config should parse");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .config(config)
        .rule(FlagAllCalls)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");
    assert!(result.violations.is_empty());
    assert_eq!(result.files_checked, 1);
}

#[test]
fn severity_override_applies_to_all_violations() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/app.js", "run();\n");

    let config = Config::parse("[rules.flag-all-calls]\nseverity = \"warning\"\n")
        .expect("config should parse");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .config(config)
        .rule(FlagAllCalls)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert!(!result.has_errors());
}

#[test]
fn violations_are_sorted_by_file_then_line() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/z.js", "one();\n");
    write(tmp.path(), "src/a.js", "two();\nthree();\n");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(FlagAllCalls)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");
    let files: Vec<String> = result
        .violations
        .iter()
        .map(|v| v.location.file.display().to_string())
        .collect();

    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
    assert_eq!(result.violations[0].location.line, 1);
    assert_eq!(result.violations[1].location.line, 2);
}
