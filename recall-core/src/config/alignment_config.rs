use serde::{Deserialize, Serialize};

use super::defaults;

/// Alignment engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Minimum cosine similarity for a pair to count as aligned.
    pub similarity_threshold: f64,
    /// Aligned pairs kept after sorting by similarity.
    pub max_pairs: usize,
    /// Snippet length (chars) per chunk in the merged context.
    pub snippet_chars: usize,
    /// Chunks rendered per merged-context section.
    pub max_context_chunks: usize,
    /// Connections rendered in the merged context.
    pub max_context_pairs: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_ALIGNMENT_THRESHOLD,
            max_pairs: defaults::DEFAULT_MAX_ALIGNED_PAIRS,
            snippet_chars: defaults::DEFAULT_SNIPPET_CHARS,
            max_context_chunks: defaults::DEFAULT_MAX_CONTEXT_CHUNKS,
            max_context_pairs: defaults::DEFAULT_MAX_CONTEXT_PAIRS,
        }
    }
}
