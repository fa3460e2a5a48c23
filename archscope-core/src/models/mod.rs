//! Data models for ArchScope
//!
//! Everything here is a plain serializable value: the scanned directory
//! tree, the four-tier graph model handed to the visualization layer, and
//! the aggregate analysis result. Field names serialize in camelCase
//! because the consuming UI contract is JavaScript-shaped.

pub mod file_info;
pub mod graph;
pub mod result;
pub mod structure;

pub use file_info::FileInfo;
pub use graph::{Complexity, GraphLevel, GraphVertex, Health, LevelStats, Position, Status, VertexMetrics};
pub use result::{AnalysisResult, AnalysisStats};
pub use structure::DirectoryStructure;
