//! Hierarchical Graph Model
//!
//! The analyzer emits exactly four graph levels, from coarse (-1, root
//! orchestration) to fine-grained (2, implementation hotspots). Vertices
//! reference each other by flat string ids, never by object reference, so
//! the whole model stays cycle-free JSON. Dependency ids may dangle; the
//! consumer renders unresolved references as no-ops.

use serde::{Deserialize, Serialize};

/// Vertex complexity tier, derived from file count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Vertex lifecycle status shown by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Development,
    Planned,
    Critical,
}

/// Health tier derived from average import count and file size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Excellent,
    Good,
    Monitor,
    Refactor,
}

impl Health {
    /// Whether this tier counts as healthy in the aggregate buckets.
    pub fn is_healthy(self) -> bool {
        matches!(self, Health::Excellent | Health::Good)
    }
}

/// Synthetic 2D layout position, percentage coordinates in 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Coupling metrics attached to a vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexMetrics {
    /// Import statements flowing out of this unit's files
    pub afferent_coupling: usize,
    /// Exported identifiers offered by this unit's files
    pub efferent_coupling: usize,
    /// `afferent / (afferent + efferent + 1)`, always in `[0, 1)`
    pub instability: f64,
    /// Bounded connectivity score for display, 0-100
    pub importance: u32,
}

/// One node in a graph level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphVertex {
    /// Unique id within the level set, used for dependency lookups
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: String,
    /// Hierarchy tier this vertex belongs to: -1, 0, 1 or 2
    pub level: i8,
    /// Ids of vertices this vertex depends on; dangling ids are tolerated
    pub dependencies: Vec<String>,
    pub complexity: Complexity,
    pub status: Status,
    /// Deterministic grid position assigned from insertion order
    pub position: Position,
    /// Real file paths this vertex represents (evidence trail)
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<VertexMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
}

/// Aggregate statistics for one level
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub total_files: usize,
    pub total_dependencies: usize,
    pub quality_score: f64,
}

/// One of the four hierarchy tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLevel {
    /// Level discriminant: -1, 0, 1 or 2
    pub level: i8,
    pub title: String,
    pub description: String,
    pub color: String,
    pub vertices: Vec<GraphVertex>,
    pub stats: LevelStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_buckets() {
        assert!(Health::Excellent.is_healthy());
        assert!(Health::Good.is_healthy());
        assert!(!Health::Monitor.is_healthy());
        assert!(!Health::Refactor.is_healthy());
    }

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(serde_json::to_string(&Complexity::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&Health::Monitor).unwrap(), "\"monitor\"");
    }

    #[test]
    fn test_vertex_serialization_shape() {
        let vertex = GraphVertex {
            id: "arch-libraries".to_string(),
            name: "Libraries".to_string(),
            description: "Shared helpers".to_string(),
            category: "Libraries".to_string(),
            icon: "📚".to_string(),
            level: 0,
            dependencies: vec!["arch-types".to_string()],
            complexity: Complexity::Low,
            status: Status::Active,
            position: Position { x: 12.0, y: 18.0 },
            files: vec!["src/lib/util.ts".to_string()],
            metrics: None,
            health: None,
        };

        let json = serde_json::to_value(&vertex).unwrap();
        assert_eq!(json["dependencies"][0], "arch-types");
        // Optional fields stay off the wire when absent
        assert!(json.get("metrics").is_none());
        assert!(json.get("health").is_none());
    }
}
