//! Import Graph Cycle Detection
//!
//! Builds a file-level import graph and counts its circular dependency
//! groups via strongly connected components. Import specifiers are
//! resolved the way a bundler would, minus the filesystem: relative paths
//! are joined against the importing file's directory, alias-rooted paths
//! are rebased onto the source directory, and extension / index-file
//! completion tries the usual suffixes. Specifiers that resolve to nothing
//! scanned are skipped — the count is a lower bound consistent with the
//! heuristic extraction upstream.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use archscope_core::models::FileInfo;

/// Directory an alias-rooted specifier is rebased onto
const ALIAS_TARGET: &str = "src";

const COMPLETION_SUFFIXES: [&str; 9] = [
    "", ".ts", ".tsx", ".js", ".jsx", "/index.ts", "/index.tsx", "/index.js", "/index.jsx",
];

/// Count circular dependency groups among the given files.
///
/// A group is a strongly connected component with more than one file, or a
/// single file importing itself.
pub fn count_import_cycles(files: &[&FileInfo], alias_prefix: &str) -> usize {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();
    for file in files {
        nodes.insert(file.path.as_str(), graph.add_node(()));
    }

    for file in files {
        let from = nodes[file.path.as_str()];
        let dir = parent_of(&file.path);
        for spec in &file.imports {
            let Some(base) = resolve_base(dir, spec, alias_prefix) else {
                continue;
            };
            for suffix in COMPLETION_SUFFIXES {
                let candidate = format!("{base}{suffix}");
                if let Some(&to) = nodes.get(candidate.as_str()) {
                    graph.update_edge(from, to, ());
                    break;
                }
            }
        }
    }

    let mut cycles = 0;
    for component in tarjan_scc(&graph) {
        if component.len() > 1 {
            cycles += 1;
        } else if let [only] = component[..] {
            if graph.find_edge(only, only).is_some() {
                cycles += 1;
            }
        }
    }
    cycles
}

/// Rebase a specifier to a root-relative path, without extension
/// completion. Returns `None` for specifiers that escape the root or are
/// neither relative nor alias-rooted.
fn resolve_base(dir: &str, spec: &str, alias_prefix: &str) -> Option<String> {
    if let Some(rest) = spec.strip_prefix(alias_prefix) {
        return normalize(&format!("{ALIAS_TARGET}/{rest}"));
    }
    if spec.starts_with('.') {
        return if dir.is_empty() {
            normalize(spec)
        } else {
            normalize(&format!("{dir}/{spec}"))
        };
    }
    None
}

fn parent_of(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..idx])
}

/// Collapse `.` and `..` segments; `None` when the path escapes the root.
fn normalize(path: &str) -> Option<String> {
    let mut stack: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                stack.pop()?;
            }
            other => stack.push(other),
        }
    }
    Some(stack.join("/"))
}
