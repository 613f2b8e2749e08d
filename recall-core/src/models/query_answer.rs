use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chunk::{DocumentChunk, TimelineChunk};
use super::confidence::Confidence;

/// Final result of an answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    /// Timeline chunks that contributed, in rank order.
    pub timeline_chunks: Vec<TimelineChunk>,
    /// Document chunks that contributed, in rank order.
    pub document_chunks: Vec<DocumentChunk>,
    /// Dates of the contributing timeline chunks, deduplicated and
    /// sorted ascending.
    pub dates_used: Vec<NaiveDate>,
    pub confidence: Confidence,
}
