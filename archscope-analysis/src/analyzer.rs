//! Codebase Analyzer - Orchestration Entry Point
//!
//! Composes the scan pipeline, the level builder and the global statistics
//! pass into the single `analyze` operation. The analyzer holds only its
//! immutable configuration; every call is an independent snapshot and
//! concurrent calls on one instance are safe.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use tracing::info;

use archscope_core::models::{AnalysisResult, AnalysisStats, DirectoryStructure, GraphLevel, Health};
use archscope_core::scan::FileScanner;
use archscope_core::{metrics, AnalyzerConfig, CancellationToken};

use crate::cycles;
use crate::levels::GraphLevelBuilder;
use crate::Result;

/// End-to-end static analyzer for one source tree.
#[derive(Debug, Clone)]
pub struct CodebaseAnalyzer {
    config: AnalyzerConfig,
    builder: GraphLevelBuilder,
}

impl CodebaseAnalyzer {
    /// Create an analyzer, failing fast on configuration mistakes
    /// (missing or empty root) before any traversal.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            builder: GraphLevelBuilder::default(),
        })
    }

    /// Analyzer with a caller-supplied level builder.
    pub fn with_builder(config: AnalyzerConfig, builder: GraphLevelBuilder) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, builder })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full analysis: scan, build levels, aggregate stats.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        self.run(None)
    }

    /// Run the full analysis with cooperative cancellation.
    pub fn analyze_with_token(&self, token: &CancellationToken) -> Result<AnalysisResult> {
        self.run(Some(token))
    }

    fn run(&self, token: Option<&CancellationToken>) -> Result<AnalysisResult> {
        let started = Instant::now();

        let scanner = FileScanner::new(self.config.clone());
        let outcome = scanner.scan_with_token(token)?;
        let levels = self.builder.build_levels(&outcome.root);
        let stats = self.global_stats(&outcome.root, &levels);

        let duration_ms = started.elapsed().as_millis() as u64;
        info!(
            total_files = stats.total_files,
            circular = stats.circular_dependencies,
            duration_ms,
            "analysis complete"
        );

        Ok(AnalysisResult {
            structure: outcome.root,
            levels,
            stats,
            warnings: outcome.warnings,
            timestamp: Utc::now(),
            duration_ms,
        })
    }

    fn global_stats(&self, structure: &DirectoryStructure, levels: &[GraphLevel]) -> AnalysisStats {
        let files = structure.flatten_files();

        let total_dependencies = levels
            .iter()
            .flat_map(|level| &level.vertices)
            .map(|vertex| vertex.dependencies.len())
            .sum();

        let mut healthy_components = 0;
        let mut monitor_components = 0;
        let mut refactor_components = 0;
        for file in files.iter().copied() {
            match metrics::health_of(&[file]) {
                Health::Excellent | Health::Good => healthy_components += 1,
                Health::Monitor => monitor_components += 1,
                Health::Refactor => refactor_components += 1,
            }
        }

        let instabilities: Vec<f64> = levels
            .iter()
            .filter(|level| level.level == 0)
            .flat_map(|level| &level.vertices)
            .filter_map(|vertex| vertex.metrics.map(|m| m.instability))
            .collect();
        let average_instability = if instabilities.is_empty() {
            0.0
        } else {
            instabilities.iter().sum::<f64>() / instabilities.len() as f64
        };

        AnalysisStats {
            total_files: structure.total_files,
            total_dependencies,
            circular_dependencies: cycles::count_import_cycles(&files, &self.config.alias_prefix),
            healthy_components,
            monitor_components,
            refactor_components,
            average_instability,
        }
    }
}

/// Analyze the given root with default configuration.
pub fn analyze_codebase(root_path: impl AsRef<Path>) -> Result<AnalysisResult> {
    CodebaseAnalyzer::new(AnalyzerConfig::for_root(root_path.as_ref()))?.analyze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use archscope_core::Error;

    #[test]
    fn test_missing_root_fails_at_construction() {
        let result = CodebaseAnalyzer::new(AnalyzerConfig::for_root("/no/such/root"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_root_fails_at_construction() {
        let result = CodebaseAnalyzer::new(AnalyzerConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
