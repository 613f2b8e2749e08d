use serde::{Deserialize, Serialize};

use super::defaults;

/// Shared configuration for both retrieval agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Chunks returned per agent.
    pub top_k: usize,
    /// Document retrieval gathers `top_k * candidate_multiplier`
    /// similarity-ranked candidates before the entity boost.
    pub candidate_multiplier: usize,
    /// Boost added per entity shared with the timeline results.
    pub entity_boost_weight: f64,
    /// Lookback window (days) for questions with no temporal scope.
    pub lookback_days: u32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            entity_boost_weight: defaults::DEFAULT_ENTITY_BOOST_WEIGHT,
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
        }
    }
}
