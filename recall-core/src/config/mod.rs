//! Per-subsystem configuration, aggregated into [`RecallConfig`].

mod alignment_config;
pub mod defaults;
mod generation_config;
mod planner_config;
mod retrieval_config;
mod synthesis_config;

pub use alignment_config::AlignmentConfig;
pub use generation_config::GenerationConfig;
pub use planner_config::PlannerConfig;
pub use retrieval_config::RetrievalConfig;
pub use synthesis_config::SynthesisConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub planner: PlannerConfig,
    pub retrieval: RetrievalConfig,
    pub alignment: AlignmentConfig,
    pub synthesis: SynthesisConfig,
    pub generation: GenerationConfig,
}

impl RecallConfig {
    /// Parse from a TOML string. Missing sections and fields fall back
    /// to their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
