//! Heuristic pre-screening of candidate files.
//!
//! Two text-level signatures mark a file as unanalyzable before it is ever
//! submitted: a `port` value declaration directly after a newline, and the
//! legacy `module ... where` header on the first line. Both are deliberate
//! approximations over raw text, kept exactly as-is rather than tightened
//! into real parsing; skipped files are counted separately from engine
//! failures.

use once_cell::sync::Lazy;
use regex::Regex;

static PORT_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\nport [a-z][a-zA-Z0-9_]*'? =").expect("port declaration pattern is valid")
});

/// Pure predicate: `true` when the content should never reach the engine.
pub fn should_skip(content: &str) -> bool {
    let first_line = content.lines().next().unwrap_or("");
    let legacy_module_header = first_line.starts_with("module") && first_line.contains("where");
    PORT_DECLARATION.is_match(content) || legacy_module_header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_declaration_after_newline_is_skipped() {
        assert!(should_skip("module Main exposing (..)\nport foo = bar"));
    }

    #[test]
    fn primed_port_identifier_is_skipped() {
        assert!(should_skip("module Main exposing (..)\nport foo' = bar"));
    }

    #[test]
    fn port_on_first_line_is_not_skipped() {
        // The heuristic requires a preceding newline; a leading port
        // declaration slips through, as documented.
        assert!(!should_skip("port foo = bar"));
    }

    #[test]
    fn port_with_uppercase_identifier_is_not_skipped() {
        assert!(!should_skip("module Main exposing (..)\nport Foo = bar"));
    }

    #[test]
    fn port_module_header_is_not_skipped() {
        assert!(!should_skip("port module Main exposing (..)\nx = 1"));
    }

    #[test]
    fn legacy_module_header_is_skipped() {
        assert!(should_skip("module Foo where\nx = 1"));
    }

    #[test]
    fn where_after_first_line_is_not_skipped() {
        assert!(!should_skip(
            "module Foo exposing (..)\nx = y\n  where y = 1"
        ));
    }

    #[test]
    fn both_signatures_combined_are_skipped() {
        assert!(should_skip("module Foo where\nport x = 1"));
    }

    #[test]
    fn plain_declaration_is_not_skipped() {
        assert!(!should_skip("x = 1"));
    }

    #[test]
    fn empty_content_is_not_skipped() {
        assert!(!should_skip(""));
    }

    #[test]
    fn decision_is_idempotent() {
        let content = "module Foo where\nport x = 1";
        assert_eq!(should_skip(content), should_skip(content));
        let content = "module Foo exposing (..)\nx = 1";
        assert_eq!(should_skip(content), should_skip(content));
    }
}
