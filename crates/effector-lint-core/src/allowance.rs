//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // effector-lint: allow(no-getstate) reason="read-once bootstrap value"
//! ```
//!
//! A directive suppresses a finding when it appears on the violation line
//! itself (trailing comment) or on the line directly above it.

use std::collections::HashSet;

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
struct AllowDirective {
    /// Rule names that are allowed.
    rules: HashSet<String>,
    /// Optional reason for the allowance.
    reason: Option<String>,
}

/// Checks source code for allowance comments.
///
/// # Arguments
///
/// * `content` - Source code content
/// * `line` - Line number to check (1-indexed)
/// * `rule_name` - Name of the rule to check for
///
/// # Returns
///
/// `AllowCheck::Allowed` with optional reason if a directive covering the
/// rule is found on the line or the line above.
#[must_use]
pub fn check_allow_with_reason(content: &str, line: usize, rule_name: &str) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        let line_content = lines[check_line - 1];
        if let Some(directive) = parse_allow_directive(line_content) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive from a line, full-line or trailing comment.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let comment_start = line.find("//")?;
    let comment_content = line[comment_start + 2..].trim();

    let directive = comment_content.strip_prefix("effector-lint:")?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules_str = &allow_content[..paren_end];

    let rules: HashSet<String> = rules_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = if let Some(reason_part) = rest.strip_prefix("reason=") {
        let reason_part = reason_part.trim();
        if reason_part.starts_with('"') && reason_part.len() > 1 {
            let end = reason_part[1..].find('"').map(|i| i + 1)?;
            Some(reason_part[1..end].to_string())
        } else {
            None
        }
    } else {
        None
    };

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_directive() {
        let directive = parse_allow_directive("// effector-lint: allow(no-getstate)");
        let directive = directive.expect("should parse");
        assert!(directive.rules.contains("no-getstate"));
        assert!(directive.reason.is_none());
    }

    #[test]
    fn parses_directive_with_reason() {
        let directive =
            parse_allow_directive("// effector-lint: allow(no-getstate) reason=\"SSR bootstrap\"");
        let directive = directive.expect("should parse");
        assert_eq!(directive.reason, Some("SSR bootstrap".to_string()));
    }

    #[test]
    fn parses_multiple_rules() {
        let directive = parse_allow_directive("// effector-lint: allow(rule1, rule2)");
        let directive = directive.expect("should parse");
        assert!(directive.rules.contains("rule1"));
        assert!(directive.rules.contains("rule2"));
    }

    #[test]
    fn rejects_other_prefixes() {
        assert!(parse_allow_directive("// eslint-disable-next-line").is_none());
        assert!(parse_allow_directive("const x = 1;").is_none());
    }

    #[test]
    fn allows_from_previous_line() {
        let content = "function f() {\n  // effector-lint: allow(no-getstate)\n  $user.getState();\n}";
        assert!(check_allow_with_reason(content, 3, "no-getstate").is_allowed());
        assert!(!check_allow_with_reason(content, 3, "other-rule").is_allowed());
    }

    #[test]
    fn allows_trailing_comment() {
        let content = "const v = $user.getState(); // effector-lint: allow(no-getstate)";
        assert!(check_allow_with_reason(content, 1, "no-getstate").is_allowed());
    }

    #[test]
    fn reason_is_surfaced() {
        let content = "// effector-lint: allow(no-getstate) reason=\"measured, safe here\"\n$user.getState();";
        let check = check_allow_with_reason(content, 2, "no-getstate");
        assert_eq!(check.reason(), Some("measured, safe here"));
    }

    #[test]
    fn denied_when_no_directive() {
        let content = "$user.getState();";
        assert!(!check_allow_with_reason(content, 1, "no-getstate").is_allowed());
    }
}
