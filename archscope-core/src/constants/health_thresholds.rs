//! Health Classification Thresholds
//!
//! A vertex or file set is healthy when its files stay small and import
//! little. The ladder is evaluated top-down, first match wins, over the
//! average import count and average byte size of the file set.

use crate::models::Health;

/// Thresholds for the four-tier health ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthThresholds;

impl HealthThresholds {
    /// Average imports-per-file above which a unit needs refactoring
    pub const REFACTOR_IMPORTS: f64 = 25.0;
    /// Average byte size above which a unit needs refactoring
    pub const REFACTOR_SIZE: f64 = 8000.0;

    /// Average imports-per-file above which a unit should be monitored
    pub const MONITOR_IMPORTS: f64 = 15.0;
    /// Average byte size above which a unit should be monitored
    pub const MONITOR_SIZE: f64 = 5000.0;

    /// Average imports-per-file above which a unit is merely good
    pub const GOOD_IMPORTS: f64 = 10.0;
    /// Average byte size above which a unit is merely good
    pub const GOOD_SIZE: f64 = 3000.0;

    /// Classify a unit from its average import count and average byte size.
    pub fn classify(avg_imports: f64, avg_size: f64) -> Health {
        if avg_imports > Self::REFACTOR_IMPORTS || avg_size > Self::REFACTOR_SIZE {
            Health::Refactor
        } else if avg_imports > Self::MONITOR_IMPORTS || avg_size > Self::MONITOR_SIZE {
            Health::Monitor
        } else if avg_imports > Self::GOOD_IMPORTS || avg_size > Self::GOOD_SIZE {
            Health::Good
        } else {
            Health::Excellent
        }
    }
}
