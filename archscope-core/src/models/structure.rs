//! Scanned Directory Tree Model

use serde::{Deserialize, Serialize};

use super::FileInfo;

/// One directory node in the scanned tree.
///
/// Built recursively from the leaves up during a single scan pass and
/// immutable once the scan completes. `total_files` maintains the invariant
/// `total_files == files.len() + Σ child.total_files` at every node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStructure {
    /// Directory base name
    pub name: String,
    /// Root-relative path with `/` separators, empty for the root itself
    pub path: String,
    /// Files physically inside this directory (non-recursive)
    pub files: Vec<FileInfo>,
    /// Child directories, one per non-excluded subdirectory
    pub subdirectories: Vec<DirectoryStructure>,
    /// Own files plus the recursive sum of children's totals
    pub total_files: usize,
}

impl DirectoryStructure {
    /// Build a node, computing `total_files` bottom-up.
    pub fn new(
        name: String,
        path: String,
        files: Vec<FileInfo>,
        subdirectories: Vec<DirectoryStructure>,
    ) -> Self {
        let total_files = files.len()
            + subdirectories
                .iter()
                .map(|child| child.total_files)
                .sum::<usize>();
        Self {
            name,
            path,
            files,
            subdirectories,
            total_files,
        }
    }

    /// All files in the subtree, depth-first, own files before children.
    ///
    /// The order is deterministic because the scanner records entries in
    /// sorted order; downstream layout assignment depends on this.
    pub fn flatten_files(&self) -> Vec<&FileInfo> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileInfo>) {
        out.extend(self.files.iter());
        for child in &self.subdirectories {
            child.collect_files(out);
        }
    }

    /// Verify the `total_files` invariant over the whole subtree.
    pub fn total_files_consistent(&self) -> bool {
        let expected = self.files.len()
            + self
                .subdirectories
                .iter()
                .map(|child| child.total_files)
                .sum::<usize>();
        self.total_files == expected
            && self
                .subdirectories
                .iter()
                .all(DirectoryStructure::total_files_consistent)
    }
}
