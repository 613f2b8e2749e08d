use serde::{Deserialize, Serialize};

use super::context::MergedContext;
use super::ids::EventId;

/// A same-topic correspondence detected between one timeline chunk and
/// one document chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub timeline_event: EventId,
    pub document_event: EventId,
    /// Cosine similarity between the two chunks' embeddings. Always
    /// above the configured alignment threshold.
    pub similarity: f64,
}

/// Output of the Alignment engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentOutput {
    /// Unique pairs sorted by similarity descending.
    pub aligned_pairs: Vec<AlignedPair>,
    /// Deterministic one-sentence-per-fact summary of what was found.
    pub summary: String,
    /// The merged, provenance-labeled context for the Synthesizer.
    pub context: MergedContext,
}
