use serde::{Deserialize, Serialize};

use super::temporal::TemporalScope;

/// Default retrieval focus when planning fails or extracts nothing.
pub const DEFAULT_SUBTASKS: &str = "Retrieve relevant information and answer the question.";

/// Structured retrieval plan produced by the Planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPlan {
    pub temporal_scope: TemporalScope,
    /// Main themes the question is about, in extraction order.
    pub topics: Vec<String>,
    /// Named people, organizations, projects, in extraction order.
    pub entities: Vec<String>,
    /// Free-text description of what retrieval must satisfy.
    pub subtasks: String,
    /// True when extraction failed and the plan fell back to defaults.
    pub degraded: bool,
}

impl QueryPlan {
    /// The degraded plan used when extraction fails after retries.
    ///
    /// Keeps whatever scope the deterministic resolver found; empty
    /// topic/entity lists and the default subtasks otherwise.
    pub fn degraded(temporal_scope: TemporalScope) -> Self {
        Self {
            temporal_scope,
            topics: Vec::new(),
            entities: Vec::new(),
            subtasks: DEFAULT_SUBTASKS.to_string(),
            degraded: true,
        }
    }
}
