//! Pipeline stages and stage-tagged failure.

use std::fmt;

use recall_core::errors::QueryError;

/// The five stages a query passes through, in order. The two retrieval
/// stages run concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Planning,
    TimelineRetrieval,
    DocumentRetrieval,
    Alignment,
    Synthesis,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Planning => "planning",
            Stage::TimelineRetrieval => "timeline retrieval",
            Stage::DocumentRetrieval => "document retrieval",
            Stage::Alignment => "alignment",
            Stage::Synthesis => "synthesis",
        };
        f.write_str(s)
    }
}

/// A query that failed, tagged with the stage that aborted it.
/// Partial answers are never returned.
#[derive(Debug, thiserror::Error)]
#[error("query failed during {stage}: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: QueryError,
}

impl PipelineError {
    pub fn new(stage: Stage, source: QueryError) -> Self {
        Self { stage, source }
    }
}
