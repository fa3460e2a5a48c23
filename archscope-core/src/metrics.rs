//! Coupling, Health and Complexity Metrics
//!
//! Pure functions over scanned file sets. Naming convention: this analyzer
//! counts *imports* as afferent coupling (how far a unit reaches into the
//! rest of the codebase) and *exports* as efferent coupling (how much it
//! offers outward) — the inverse of the classic Martin metric; the
//! behavior, not the textbook name, is the contract here.
//!
//! All functions are total: empty file sets produce neutral defaults
//! (zero coupling, Excellent health), never NaN or infinity.

use crate::constants::{ComplexityThresholds, HealthThresholds};
use crate::models::{Complexity, FileInfo, Health, VertexMetrics};

/// Sum of import counts across a file set.
pub fn afferent_coupling(files: &[&FileInfo]) -> usize {
    files.iter().map(|file| file.imports.len()).sum()
}

/// Sum of export counts across a file set.
pub fn efferent_coupling(files: &[&FileInfo]) -> usize {
    files.iter().map(|file| file.exports.len()).sum()
}

/// Instability ratio in `[0, 1)`.
///
/// The `+1` in the denominator keeps the function total for `(0, 0)` and
/// bounds the ratio strictly below 1 for any finite inputs; downstream
/// golden values depend on this exact smoothing constant.
pub fn instability(afferent: usize, efferent: usize) -> f64 {
    afferent as f64 / (afferent + efferent + 1) as f64
}

/// Bounded connectivity score for display, 0-100.
pub fn importance(afferent: usize, efferent: usize) -> u32 {
    (((afferent + efferent) * 4).min(100)) as u32
}

/// Health tier from the averages of a file set; Excellent when empty.
pub fn health_of(files: &[&FileInfo]) -> Health {
    if files.is_empty() {
        return Health::Excellent;
    }
    let count = files.len() as f64;
    let avg_imports = afferent_coupling(files) as f64 / count;
    let avg_size = files.iter().map(|file| file.size).sum::<u64>() as f64 / count;
    HealthThresholds::classify(avg_imports, avg_size)
}

/// Complexity tier from the number of files a vertex represents.
pub fn complexity_of(file_count: usize) -> Complexity {
    ComplexityThresholds::classify(file_count)
}

/// Full per-vertex metrics block for a file set.
pub fn vertex_metrics(files: &[&FileInfo]) -> VertexMetrics {
    let afferent = afferent_coupling(files);
    let efferent = efferent_coupling(files);
    VertexMetrics {
        afferent_coupling: afferent,
        efferent_coupling: efferent,
        instability: instability(afferent, efferent),
        importance: importance(afferent, efferent),
    }
}
