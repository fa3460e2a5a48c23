//! Graph Level Builder
//!
//! Transforms the categorized, metric-annotated file tree into the four
//! hierarchy tiers:
//! - Level -1: root-level infrastructure buckets with a fixed build-order
//!   dependency chain
//! - Level 0: one vertex per architectural category, edges from a fixed
//!   category-to-upstream lookup table
//! - Level 1: detailed vertices for the critical categories only
//! - Level 2: the most connected individual files
//!
//! The builder always returns exactly four levels in order -1, 0, 1, 2; an
//! empty tree yields four levels with empty vertex sets and zeroed stats.
//! Vertex positions are a pure function of insertion order, so re-running
//! on an unchanged tree reproduces the layout exactly. Dependency ids may
//! reference vertices in other levels or nothing at all; consumers treat
//! unresolved ids as no-ops.

use archscope_core::constants::layout;
use archscope_core::metrics;
use archscope_core::models::{
    DirectoryStructure, FileInfo, GraphLevel, GraphVertex, Health, LevelStats, Status,
    VertexMetrics,
};

/// Hot-file filter: more imports than this marks a candidate
const HOTSPOT_IMPORT_THRESHOLD: usize = 5;
/// Hot-file filter: more exports than this marks a candidate
const HOTSPOT_EXPORT_THRESHOLD: usize = 3;
/// Hot-file vertices kept after ranking
const HOTSPOT_LIMIT: usize = 8;
/// Import specifiers carried over as a hot-file vertex's dependencies
const HOTSPOT_DEPENDENCY_LIMIT: usize = 3;
/// File paths recorded on a vertex as evidence
const EVIDENCE_FILE_LIMIT: usize = 10;
/// A critical category needs more files than this for a Level 1 vertex
const CRITICAL_MIN_FILES: usize = 5;

/// Quality penalty per vertex in the Monitor tier
const MONITOR_PENALTY: f64 = 8.0;
/// Quality penalty per vertex in the Refactor tier
const REFACTOR_PENALTY: f64 = 20.0;

/// Root-level infrastructure buckets, in build order
const ROOT_BUCKETS: [(&str, &str, &str); 4] = [
    ("source-control", "Source Control", "🌿"),
    ("package-management", "Package Management", "📦"),
    ("build-configuration", "Build Configuration", "⚙️"),
    ("documentation", "Documentation", "📝"),
];

/// Builds the four graph levels from a scanned tree.
///
/// The category-to-upstream table and the critical-category allow-list are
/// construction-time data, not global state, so tests can substitute their
/// own.
#[derive(Debug, Clone)]
pub struct GraphLevelBuilder {
    upstreams: Vec<(String, Vec<String>)>,
    critical_categories: Vec<String>,
}

impl Default for GraphLevelBuilder {
    fn default() -> Self {
        Self {
            upstreams: default_upstreams(),
            critical_categories: vec![
                "App Router".to_string(),
                "Components".to_string(),
                "Libraries".to_string(),
                "Types".to_string(),
                "API".to_string(),
            ],
        }
    }
}

impl GraphLevelBuilder {
    pub fn new(upstreams: Vec<(String, Vec<String>)>, critical_categories: Vec<String>) -> Self {
        Self {
            upstreams,
            critical_categories,
        }
    }

    /// Build all four levels in fixed order.
    pub fn build_levels(&self, structure: &DirectoryStructure) -> Vec<GraphLevel> {
        let files = structure.flatten_files();
        let groups = group_by_category(&files);

        vec![
            self.build_root_level(structure),
            self.build_architecture_level(&groups),
            self.build_component_level(&groups),
            self.build_hotspot_level(&files),
        ]
    }

    /// Level -1: root-level files grouped into fixed infrastructure buckets.
    fn build_root_level(&self, structure: &DirectoryStructure) -> GraphLevel {
        let mut buckets: [Vec<&FileInfo>; ROOT_BUCKETS.len()] = Default::default();
        for file in &structure.files {
            if let Some(index) = root_bucket_index(file) {
                buckets[index].push(file);
            }
        }

        let mut vertices = Vec::new();
        let mut bucket_file_total = 0;
        for (index, (key, name, icon)) in ROOT_BUCKETS.iter().enumerate() {
            let bucket = &buckets[index];
            if bucket.is_empty() {
                continue;
            }
            bucket_file_total += bucket.len();
            // Build-order chain: each bucket depends on the one before it,
            // whether or not that bucket produced a vertex this run.
            let dependencies = if index == 0 {
                vec![]
            } else {
                vec![format!("root-{}", ROOT_BUCKETS[index - 1].0)]
            };
            let position = layout::row_position(vertices.len());
            vertices.push(GraphVertex {
                id: format!("root-{key}"),
                name: (*name).to_string(),
                description: format!("{} root-level files", bucket.len()),
                category: (*name).to_string(),
                icon: (*icon).to_string(),
                level: -1,
                dependencies,
                complexity: metrics::complexity_of(bucket.len()),
                status: Status::Active,
                position,
                files: evidence_paths(bucket),
                metrics: None,
                health: None,
            });
        }

        finish_level(
            -1,
            "Root Orchestration",
            "Top-level project infrastructure in build order",
            "#6366f1",
            vertices,
            bucket_file_total,
        )
    }

    /// Level 0: one vertex per architectural category across all files.
    fn build_architecture_level(&self, groups: &[(String, Vec<&FileInfo>)]) -> GraphLevel {
        let mut vertices = Vec::new();
        let mut total_files = 0;
        for (category, files) in groups {
            total_files += files.len();
            let health = metrics::health_of(files);
            let position = layout::grid_position(vertices.len());
            vertices.push(GraphVertex {
                id: arch_id(category),
                name: category.clone(),
                description: format!("{} files", files.len()),
                category: category.clone(),
                icon: icon_for(category).to_string(),
                level: 0,
                dependencies: self.upstream_ids(category, arch_id),
                complexity: metrics::complexity_of(files.len()),
                status: status_for(health),
                position,
                files: evidence_paths(files),
                metrics: Some(metrics::vertex_metrics(files)),
                health: Some(health),
            });
        }

        finish_level(
            0,
            "Master Architecture",
            "Architectural categories across the full source tree",
            "#8b5cf6",
            vertices,
            total_files,
        )
    }

    /// Level 1: detailed vertices for critical categories above the size
    /// threshold.
    fn build_component_level(&self, groups: &[(String, Vec<&FileInfo>)]) -> GraphLevel {
        let mut vertices = Vec::new();
        let mut total_files = 0;
        for category in &self.critical_categories {
            let Some((_, files)) = groups.iter().find(|(name, _)| name == category) else {
                continue;
            };
            if files.len() <= CRITICAL_MIN_FILES {
                continue;
            }
            total_files += files.len();
            let health = metrics::health_of(files);
            let position = layout::grid_position(vertices.len());
            vertices.push(GraphVertex {
                id: component_id(category),
                name: category.clone(),
                description: format!("{} files in the {category} component", files.len()),
                category: category.clone(),
                icon: icon_for(category).to_string(),
                level: 1,
                dependencies: self.critical_upstream_ids(category),
                complexity: metrics::complexity_of(files.len()),
                status: status_for(health),
                position,
                files: evidence_paths(files),
                metrics: Some(metrics::vertex_metrics(files)),
                health: Some(health),
            });
        }

        finish_level(
            1,
            "Component Deep-Dive",
            "Detailed views of the critical architectural components",
            "#06b6d4",
            vertices,
            total_files,
        )
    }

    /// Level 2: the most connected individual files.
    fn build_hotspot_level(&self, files: &[&FileInfo]) -> GraphLevel {
        let mut hotspots: Vec<&FileInfo> = files
            .iter()
            .copied()
            .filter(|file| {
                file.imports.len() > HOTSPOT_IMPORT_THRESHOLD
                    || file.exports.len() > HOTSPOT_EXPORT_THRESHOLD
            })
            .collect();
        hotspots.sort_by(|a, b| {
            b.connectivity()
                .cmp(&a.connectivity())
                .then_with(|| a.path.cmp(&b.path))
        });
        hotspots.truncate(HOTSPOT_LIMIT);

        let mut vertices = Vec::new();
        for (index, file) in hotspots.iter().copied().enumerate() {
            let health = metrics::health_of(&[file]);
            let afferent = file.imports.len();
            let efferent = file.exports.len();
            vertices.push(GraphVertex {
                id: format!("file-{}", slug(&file.path)),
                name: file.name.clone(),
                description: format!("{afferent} imports, {efferent} exports"),
                category: file.category.clone(),
                icon: icon_for(&file.category).to_string(),
                level: 2,
                // File-level edges: the file's own first import specifiers
                dependencies: file
                    .imports
                    .iter()
                    .take(HOTSPOT_DEPENDENCY_LIMIT)
                    .cloned()
                    .collect(),
                complexity: metrics::complexity_of(1),
                status: status_for(health),
                position: layout::grid_position(index),
                files: vec![file.path.clone()],
                metrics: Some(VertexMetrics {
                    afferent_coupling: afferent,
                    efferent_coupling: efferent,
                    instability: metrics::instability(afferent, efferent),
                    importance: metrics::importance(afferent, efferent),
                }),
                health: Some(health),
            });
        }

        let total_files = vertices.len();
        finish_level(
            2,
            "Implementation Hotspots",
            "Most connected individual files",
            "#f59e0b",
            vertices,
            total_files,
        )
    }

    fn upstream_ids(&self, category: &str, to_id: fn(&str) -> String) -> Vec<String> {
        self.upstreams
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, ups)| ups.iter().map(|up| to_id(up)).collect())
            .unwrap_or_default()
    }

    fn critical_upstream_ids(&self, category: &str) -> Vec<String> {
        self.upstreams
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, ups)| {
                ups.iter()
                    .filter(|up| self.critical_categories.iter().any(|c| c == *up))
                    .map(|up| component_id(up))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Group files by category, preserving first-encounter order so downstream
/// vertex order and positions stay deterministic.
fn group_by_category<'a>(files: &[&'a FileInfo]) -> Vec<(String, Vec<&'a FileInfo>)> {
    let mut groups: Vec<(String, Vec<&'a FileInfo>)> = Vec::new();
    for file in files {
        match groups.iter_mut().find(|(name, _)| *name == file.category) {
            Some((_, members)) => members.push(file),
            None => groups.push((file.category.clone(), vec![file])),
        }
    }
    groups
}

fn root_bucket_index(file: &FileInfo) -> Option<usize> {
    let name = file.name.to_lowercase();
    if name.starts_with(".git") {
        Some(0)
    } else if name.contains("package") || name.contains("lock") {
        Some(1)
    } else if name.contains("config") || name.starts_with(".env") {
        Some(2)
    } else if file.extension == ".md" {
        Some(3)
    } else {
        None
    }
}

fn finish_level(
    level: i8,
    title: &str,
    description: &str,
    color: &str,
    vertices: Vec<GraphVertex>,
    total_files: usize,
) -> GraphLevel {
    let stats = if vertices.is_empty() {
        LevelStats::default()
    } else {
        LevelStats {
            total_files,
            total_dependencies: vertices.iter().map(|v| v.dependencies.len()).sum(),
            quality_score: quality_score(&vertices),
        }
    };
    GraphLevel {
        level,
        title: title.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        vertices,
        stats,
    }
}

/// 100 minus per-vertex penalties for the unhealthy tiers, clamped to
/// [0, 100]. Vertices without a health tier count as healthy.
fn quality_score(vertices: &[GraphVertex]) -> f64 {
    let penalty: f64 = vertices
        .iter()
        .map(|vertex| match vertex.health {
            Some(Health::Monitor) => MONITOR_PENALTY,
            Some(Health::Refactor) => REFACTOR_PENALTY,
            _ => 0.0,
        })
        .sum();
    (100.0 - penalty).max(0.0)
}

fn status_for(health: Health) -> Status {
    match health {
        Health::Refactor => Status::Critical,
        Health::Monitor => Status::Development,
        Health::Excellent | Health::Good => Status::Active,
    }
}

fn arch_id(category: &str) -> String {
    format!("arch-{}", slug(category))
}

fn component_id(category: &str) -> String {
    format!("component-{}", slug(category))
}

fn evidence_paths(files: &[&FileInfo]) -> Vec<String> {
    files
        .iter()
        .take(EVIDENCE_FILE_LIMIT)
        .map(|file| file.path.clone())
        .collect()
}

/// Lowercased, dash-separated id fragment; consecutive separators collapse.
fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_dash = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

fn icon_for(category: &str) -> &'static str {
    match category {
        "Configuration" => "⚙️",
        "Package Management" => "📦",
        "Documentation" => "📝",
        "API" => "🔌",
        "App Router" => "🧭",
        "UI Components" => "🎨",
        "Components" => "🧩",
        "Libraries" => "📚",
        "Domain" => "🏛️",
        "Hooks" => "🪝",
        "State Management" => "🗃️",
        "Types" => "🏷️",
        "Utilities" => "🛠️",
        "Styles" => "💅",
        "Localization" => "🌐",
        "Database" => "🗄️",
        "Static Assets" => "🖼️",
        "Middleware" => "🚦",
        _ => "📄",
    }
}

fn default_upstreams() -> Vec<(String, Vec<String>)> {
    let table: [(&str, &[&str]); 9] = [
        ("App Router", &["Components", "Libraries", "API"]),
        ("Components", &["UI Components", "Libraries", "Types"]),
        ("UI Components", &["Libraries", "Styles"]),
        ("API", &["Domain", "Database", "Libraries"]),
        ("Domain", &["Types", "Database"]),
        ("Hooks", &["Libraries", "State Management"]),
        ("State Management", &["Types"]),
        ("Libraries", &["Types"]),
        ("Middleware", &["Libraries"]),
    ];
    table
        .iter()
        .map(|(name, ups)| {
            (
                (*name).to_string(),
                ups.iter().map(|up| (*up).to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, category: &str, imports: usize, exports: usize) -> FileInfo {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        let extension = match name.rfind('.') {
            Some(idx) if idx > 0 => name[idx..].to_lowercase(),
            _ => String::new(),
        };
        FileInfo {
            path: path.to_string(),
            name,
            extension,
            size: 100,
            category: category.to_string(),
            imports: (0..imports).map(|i| format!("./dep{i}")).collect(),
            exports: (0..exports).map(|i| format!("name{i}")).collect(),
        }
    }

    fn tree(files: Vec<FileInfo>) -> DirectoryStructure {
        DirectoryStructure::new("root".to_string(), String::new(), files, vec![])
    }

    #[test]
    fn test_empty_tree_still_yields_four_levels() {
        let levels = GraphLevelBuilder::default().build_levels(&tree(vec![]));
        let ids: Vec<i8> = levels.iter().map(|l| l.level).collect();
        assert_eq!(ids, vec![-1, 0, 1, 2]);
        for level in &levels {
            assert!(level.vertices.is_empty());
            assert_eq!(level.stats, LevelStats::default());
        }
    }

    #[test]
    fn test_root_level_buckets_and_chain() {
        let structure = tree(vec![
            file("package.json", "Package Management", 0, 0),
            file("next.config.js", "Configuration", 0, 0),
            file("README.md", "Documentation", 0, 0),
        ]);
        let levels = GraphLevelBuilder::default().build_levels(&structure);
        let root = &levels[0];

        let ids: Vec<&str> = root.vertices.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "root-package-management",
                "root-build-configuration",
                "root-documentation"
            ]
        );
        // Chain follows build order even when a bucket vertex is absent
        assert_eq!(root.vertices[0].dependencies, vec!["root-source-control"]);
        assert_eq!(root.vertices[1].dependencies, vec!["root-package-management"]);
    }

    #[test]
    fn test_architecture_level_vertex_per_category() {
        let structure = tree(vec![
            file("src/app/page.tsx", "App Router", 2, 1),
            file("src/lib/util.ts", "Libraries", 0, 3),
        ]);
        let levels = GraphLevelBuilder::default().build_levels(&structure);
        let arch = &levels[1];

        assert_eq!(arch.vertices.len(), 2);
        let app = arch.vertices.iter().find(|v| v.name == "App Router").unwrap();
        assert_eq!(app.metrics.unwrap().afferent_coupling, 2);
        assert!(app.dependencies.contains(&"arch-libraries".to_string()));

        let libs = arch.vertices.iter().find(|v| v.name == "Libraries").unwrap();
        assert_eq!(libs.metrics.unwrap().efferent_coupling, 3);
    }

    #[test]
    fn test_component_level_threshold() {
        let few: Vec<FileInfo> = (0..5)
            .map(|i| file(&format!("src/types/t{i}.ts"), "Types", 1, 1))
            .collect();
        let mut many: Vec<FileInfo> = (0..6)
            .map(|i| file(&format!("src/lib/l{i}.ts"), "Libraries", 1, 1))
            .collect();
        many.extend(few);

        let levels = GraphLevelBuilder::default().build_levels(&tree(many));
        let component = &levels[2];
        let names: Vec<&str> = component.vertices.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Libraries"]);
        assert_eq!(component.vertices[0].id, "component-libraries");
    }

    #[test]
    fn test_hotspot_ranking_and_limit() {
        let mut files = Vec::new();
        for i in 0..12 {
            // Connectivity increases with i; all pass the import filter
            files.push(file(&format!("src/h{i:02}.ts"), "Libraries", 6 + i, 0));
        }
        files.push(file("src/quiet.ts", "Libraries", 1, 1));

        let levels = GraphLevelBuilder::default().build_levels(&tree(files));
        let hotspots = &levels[3];

        assert_eq!(hotspots.vertices.len(), HOTSPOT_LIMIT);
        // Ranked by connectivity descending
        assert_eq!(hotspots.vertices[0].name, "h11.ts");
        let first = &hotspots.vertices[0];
        assert_eq!(first.dependencies.len(), HOTSPOT_DEPENDENCY_LIMIT);
        assert_eq!(first.dependencies[0], "./dep0");
    }

    #[test]
    fn test_hotspot_export_filter() {
        let files = vec![
            file("src/exporter.ts", "Libraries", 0, 4),
            file("src/quiet.ts", "Libraries", 0, 3),
        ];
        let levels = GraphLevelBuilder::default().build_levels(&tree(files));
        let names: Vec<&str> = levels[3].vertices.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["exporter.ts"]);
    }

    #[test]
    fn test_positions_follow_insertion_order() {
        let files: Vec<FileInfo> = (0..6)
            .map(|i| file(&format!("src/c{i}/x.ts"), &format!("Cat{i}"), 0, 0))
            .collect();
        let levels = GraphLevelBuilder::default().build_levels(&tree(files));
        let arch = &levels[1];

        for (index, vertex) in arch.vertices.iter().enumerate() {
            assert_eq!(vertex.position, layout::grid_position(index));
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let structure = tree(vec![
            file("package.json", "Package Management", 0, 0),
            file("src/app/page.tsx", "App Router", 7, 1),
            file("src/lib/util.ts", "Libraries", 0, 4),
        ]);
        let builder = GraphLevelBuilder::default();
        assert_eq!(builder.build_levels(&structure), builder.build_levels(&structure));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("App Router"), "app-router");
        assert_eq!(slug("src/lib/util.ts"), "src-lib-util-ts");
        assert_eq!(slug("  odd--name  "), "odd-name");
    }
}
