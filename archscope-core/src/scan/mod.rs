//! Scan Pipeline
//!
//! Turns a directory tree on disk into a [`DirectoryStructure`] snapshot:
//! - `classifier` assigns each file an architectural category
//! - `imports` extracts local import/export relationships from raw text
//! - `scanner` drives the recursive, failure-tolerant walk
//!
//! [`DirectoryStructure`]: crate::models::DirectoryStructure

pub mod classifier;
pub mod imports;
pub mod scanner;

pub use classifier::{ClassifierRule, FileClassifier, Matcher};
pub use imports::{extract_exports, extract_imports};
pub use scanner::{FileScanner, ScanOutcome};
