//! Aggregate Analysis Result Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DirectoryStructure, GraphLevel};

/// Global statistics aggregated across the whole analysis.
///
/// `total_dependencies` sums every vertex's dependency-set size across all
/// levels; a logical dependency appearing at multiple levels is counted at
/// each, which is an accepted approximation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub total_files: usize,
    pub total_dependencies: usize,
    /// Strongly connected components of the file import graph
    pub circular_dependencies: usize,
    pub healthy_components: usize,
    pub monitor_components: usize,
    pub refactor_components: usize,
    pub average_instability: f64,
}

/// Complete result of one analysis call.
///
/// A fresh, independent snapshot: the analyzer hands it to the caller by
/// value and keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The raw scanned filesystem tree
    pub structure: DirectoryStructure,
    /// Exactly four levels, in order -1, 0, 1, 2
    pub levels: Vec<GraphLevel>,
    pub stats: AnalysisStats,
    /// Non-fatal scan problems (unreadable paths) accumulated during the run
    pub warnings: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_is_zeroed() {
        let stats = AnalysisStats::default();
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.circular_dependencies, 0);
        assert_eq!(stats.average_instability, 0.0);
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = AnalysisResult {
            structure: DirectoryStructure::new("root".to_string(), String::new(), vec![], vec![]),
            levels: vec![],
            stats: AnalysisStats::default(),
            warnings: vec!["skipped directory: secrets".to_string()],
            timestamp: Utc::now(),
            duration_ms: 7,
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_wire_field_names() {
        let result = AnalysisResult {
            structure: DirectoryStructure::new("root".to_string(), String::new(), vec![], vec![]),
            levels: vec![],
            stats: AnalysisStats::default(),
            warnings: vec![],
            timestamp: Utc::now(),
            duration_ms: 0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["stats"].get("circularDependencies").is_some());
        assert!(json["structure"].get("totalFiles").is_some());
        assert!(json.get("durationMs").is_some());
    }
}
