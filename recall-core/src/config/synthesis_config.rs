use serde::{Deserialize, Serialize};

use super::defaults;

/// Synthesizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Regenerations allowed after a failed self-check. The loop is
    /// strictly bounded; the final draft is accepted unconditionally.
    pub max_regenerations: u32,
    /// Confidence multiplier when the first self-check failed.
    pub regeneration_penalty: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_regenerations: defaults::DEFAULT_MAX_REGENERATIONS,
            regeneration_penalty: defaults::DEFAULT_REGENERATION_PENALTY,
        }
    }
}
