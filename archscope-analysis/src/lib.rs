//! ArchScope Analysis - Graph Construction and Orchestration
//!
//! This crate turns the scanned tree produced by `archscope-core` into the
//! four-tier hierarchical graph model consumed by the visualization layer,
//! and exposes the single `analyze_codebase` entry point that sequences
//! scan, level construction and global statistics.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analyzer;
pub mod cycles;
pub mod levels;

// Re-export main types for convenience
pub use analyzer::{analyze_codebase, CodebaseAnalyzer};
pub use levels::GraphLevelBuilder;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, archscope_core::Error>;
