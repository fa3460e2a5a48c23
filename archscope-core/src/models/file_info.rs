//! Scanned File Model

use serde::{Deserialize, Serialize};

/// One scanned source file.
///
/// Created during the scan pass and never mutated afterwards; owned by the
/// [`DirectoryStructure`](super::DirectoryStructure) node that contains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Root-relative path with `/` separators (unique within a scan)
    pub path: String,
    /// Base file name
    pub name: String,
    /// File suffix including the dot (e.g. `.tsx`), empty when absent
    pub extension: String,
    /// Byte length at scan time
    pub size: u64,
    /// Semantic category assigned once at scan time
    pub category: String,
    /// Distinct local import specifiers, first-occurrence order
    pub imports: Vec<String>,
    /// Distinct exported identifier names, first-occurrence order
    pub exports: Vec<String>,
}

impl FileInfo {
    /// Combined import/export connectivity of this file.
    pub fn connectivity(&self) -> usize {
        self.imports.len() + self.exports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity() {
        let file = FileInfo {
            path: "src/lib/util.ts".to_string(),
            name: "util.ts".to_string(),
            extension: ".ts".to_string(),
            size: 120,
            category: "Libraries".to_string(),
            imports: vec!["./other".to_string()],
            exports: vec!["helper".to_string(), "format".to_string()],
        };
        assert_eq!(file.connectivity(), 3);
    }

    #[test]
    fn test_serializes_camel_case() {
        let file = FileInfo {
            path: "a.ts".to_string(),
            name: "a.ts".to_string(),
            extension: ".ts".to_string(),
            size: 1,
            category: "Miscellaneous".to_string(),
            imports: vec![],
            exports: vec![],
        };
        let json = serde_json::to_value(&file).unwrap();
        assert!(json.get("extension").is_some());
        assert!(json.get("category").is_some());
    }
}
