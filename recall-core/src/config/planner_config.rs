use serde::{Deserialize, Serialize};

use super::defaults;

/// Planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Ranges wider than this many days are narrowed.
    pub max_range_days: i64,
    /// Days a too-wide range is narrowed to, keeping its end date.
    pub narrow_to_days: i64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_range_days: defaults::DEFAULT_MAX_RANGE_DAYS,
            narrow_to_days: defaults::DEFAULT_NARROW_TO_DAYS,
        }
    }
}
