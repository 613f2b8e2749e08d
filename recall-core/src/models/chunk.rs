use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::EventId;

/// A retrieval result from the timeline agent.
///
/// Ephemeral: created per query, a read-only view over an event,
/// discarded once the query completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineChunk {
    pub event_id: EventId,
    pub text: String,
    pub date: NaiveDate,
    /// Cosine similarity against the question embedding.
    pub relevance_score: f64,
}

/// A retrieval result from the document agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub event_id: EventId,
    pub text: String,
    /// Title of the owning source, for citation.
    pub source_title: String,
    /// Entity-boosted similarity against the question embedding.
    pub relevance_score: f64,
}
