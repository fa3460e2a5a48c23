//! Import/Export Extraction
//!
//! Heuristic pattern matching over raw file text, not a parser. Two import
//! shapes are recognized (ES-module `import ... from '<spec>'` including
//! bare side-effect imports, and `require('<spec>')`), and only specifiers
//! that are relative or alias-rooted are kept: external packages are not
//! part of the codebase's internal architecture. Multi-line exports,
//! re-exports and destructured exports are accepted misses. Malformed
//! source simply yields fewer matches; nothing here can fail.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref IMPORT_RE: Regex =
        Regex::new(r#"(?m)^\s*import\s+(?:[\w$*{},\s]+?from\s+)?['"]([^'"]+)['"]"#)
            .expect("valid import regex");
    static ref REQUIRE_RE: Regex =
        Regex::new(r#"require\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid require regex");
    static ref EXPORT_RE: Regex = Regex::new(
        r#"(?m)^\s*export\s+(?:default\s+)?(?:async\s+)?(?:(?:const|let|var|function|class|interface|type|enum)\s+)?([A-Za-z_$][A-Za-z0-9_$]*)"#
    )
    .expect("valid export regex");
}

/// Extract the distinct local import specifiers from file text.
///
/// Returns specifiers in first-occurrence order, deduplicated, restricted
/// to relative (`.`-leading) or alias-rooted (`alias_prefix`-leading)
/// paths.
pub fn extract_imports(content: &str, alias_prefix: &str) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = Vec::new();

    for captures in IMPORT_RE.captures_iter(content) {
        if let Some(spec) = captures.get(1) {
            found.push((spec.start(), spec.as_str()));
        }
    }
    for captures in REQUIRE_RE.captures_iter(content) {
        if let Some(spec) = captures.get(1) {
            found.push((spec.start(), spec.as_str()));
        }
    }
    found.sort_by_key(|(start, _)| *start);

    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|(_, spec)| spec.starts_with('.') || spec.starts_with(alias_prefix))
        .filter(|(_, spec)| seen.insert(spec.to_string()))
        .map(|(_, spec)| spec.to_string())
        .collect()
}

/// Extract the distinct top-level exported identifier names from file text.
pub fn extract_exports(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    EXPORT_RE
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
