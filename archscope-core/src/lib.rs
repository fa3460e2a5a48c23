//! ArchScope Core - Scan Pipeline and Data Models
//!
//! This crate provides the data-gathering half of the ArchScope codebase
//! analyzer:
//! - File classification into architectural categories
//! - Heuristic import/export extraction
//! - Recursive, failure-tolerant directory scanning
//! - Coupling, health and complexity metrics
//!
//! Graph level construction and orchestration live in `archscope-analysis`.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub mod constants;
pub mod metrics;
pub mod models;
pub mod scan;

pub use models::{
    AnalysisResult, AnalysisStats, Complexity, DirectoryStructure, FileInfo, GraphLevel,
    GraphVertex, Health, LevelStats, Position, Status, VertexMetrics,
};
pub use scan::{FileScanner, ScanOutcome};

/// Result type used throughout ArchScope
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ArchScope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Analysis error
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller cancelled the operation
    #[error("Analysis cancelled")]
    Cancelled,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Cooperative cancellation flag shared between a caller and a running scan.
///
/// The scanner checks the token between directory recursions; firing it makes
/// the scan return [`Error::Cancelled`]. Cloning shares the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration for a single analyzer instance.
///
/// Holds only immutable settings; every analysis call is an independent
/// snapshot and no state is shared between calls.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to scan
    pub root_path: PathBuf,
    /// Directory-name prefixes excluded from the scan
    pub exclude_prefixes: Vec<String>,
    /// Maximum recursion depth below the root
    pub max_depth: usize,
    /// Path-alias prefix treated as internal (e.g. `@/` mapping to `src/`)
    pub alias_prefix: String,
    /// File extensions accepted for analysis
    pub allowed_extensions: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::new(),
            exclude_prefixes: vec![
                "node_modules".to_string(),
                ".next".to_string(),
                ".git".to_string(),
                "build".to_string(),
                "dist".to_string(),
                "out".to_string(),
            ],
            max_depth: 10,
            alias_prefix: "@/".to_string(),
            allowed_extensions: vec![
                ".ts".to_string(),
                ".tsx".to_string(),
                ".js".to_string(),
                ".jsx".to_string(),
                ".json".to_string(),
                ".md".to_string(),
                ".yml".to_string(),
                ".yaml".to_string(),
                ".css".to_string(),
                ".scss".to_string(),
            ],
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration for the given root with default exclusions.
    pub fn for_root(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Self::default()
        }
    }

    /// Validate caller-supplied settings.
    ///
    /// A missing or empty root is a configuration mistake and fails fast,
    /// before any traversal begins.
    pub fn validate(&self) -> Result<()> {
        if self.root_path.as_os_str().is_empty() {
            return Err(Error::Config("root path must not be empty".to_string()));
        }
        if !self.root_path.is_dir() {
            return Err(Error::Config(format!(
                "root path is not a readable directory: {}",
                self.root_path.display()
            )));
        }
        Ok(())
    }
}
