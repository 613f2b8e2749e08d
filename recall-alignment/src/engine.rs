//! Alignment between timeline and document chunks.

use std::cmp::Ordering;

use tracing::{debug, info};

use recall_core::config::AlignmentConfig;
use recall_core::embedding::cosine_similarity;
use recall_core::errors::RecallResult;
use recall_core::models::{
    AlignedPair, AlignmentOutput, DocumentChunk, MergedContext, SectionLabel, TimelineChunk,
};
use recall_core::traits::EventStore;

/// Summary used when neither retrieval branch produced anything.
pub const EMPTY_SUMMARY: &str = "No relevant information found.";

/// A candidate pair with the chunk indices it was built from, kept
/// until the context lines are rendered.
struct ScoredPair {
    timeline_idx: usize,
    document_idx: usize,
    similarity: f64,
}

/// Detects same-topic correspondences between the timeline and
/// document chunks and builds the merged context.
///
/// Purely deterministic: embeddings come from the store, the summary is
/// assembled from the chunks themselves, and no generative call is
/// made.
pub struct AlignmentEngine<'a> {
    store: &'a dyn EventStore,
    config: AlignmentConfig,
}

impl<'a> AlignmentEngine<'a> {
    pub fn new(store: &'a dyn EventStore, config: AlignmentConfig) -> Self {
        Self { store, config }
    }

    pub fn align(
        &self,
        timeline_chunks: &[TimelineChunk],
        document_chunks: &[DocumentChunk],
    ) -> RecallResult<AlignmentOutput> {
        if timeline_chunks.is_empty() && document_chunks.is_empty() {
            debug!("both retrieval branches empty, nothing to align");
            return Ok(AlignmentOutput {
                aligned_pairs: Vec::new(),
                summary: EMPTY_SUMMARY.to_string(),
                context: MergedContext::default(),
            });
        }

        let pairs = self.compute_pairs(timeline_chunks, document_chunks)?;
        let summary = self.summarize(&pairs, timeline_chunks, document_chunks);
        let context = self.merge_context(&pairs, timeline_chunks, document_chunks);

        info!(pairs = pairs.len(), "alignment complete");
        Ok(AlignmentOutput {
            aligned_pairs: pairs
                .iter()
                .map(|p| AlignedPair {
                    timeline_event: timeline_chunks[p.timeline_idx].event_id,
                    document_event: document_chunks[p.document_idx].event_id,
                    similarity: p.similarity,
                })
                .collect(),
            summary,
            context,
        })
    }

    /// Full pairwise similarity; pairs with a missing embedding are
    /// skipped. Each (timeline, document) pair occurs at most once.
    fn compute_pairs(
        &self,
        timeline_chunks: &[TimelineChunk],
        document_chunks: &[DocumentChunk],
    ) -> RecallResult<Vec<ScoredPair>> {
        if timeline_chunks.is_empty() || document_chunks.is_empty() {
            return Ok(Vec::new());
        }

        let mut timeline_embeddings = Vec::with_capacity(timeline_chunks.len());
        for chunk in timeline_chunks {
            timeline_embeddings.push(self.store.embedding_of(chunk.event_id)?);
        }
        let mut document_embeddings = Vec::with_capacity(document_chunks.len());
        for chunk in document_chunks {
            document_embeddings.push(self.store.embedding_of(chunk.event_id)?);
        }

        let mut pairs = Vec::new();
        for (ti, t_emb) in timeline_embeddings.iter().enumerate() {
            let Some(t_emb) = t_emb else { continue };
            for (di, d_emb) in document_embeddings.iter().enumerate() {
                let Some(d_emb) = d_emb else { continue };
                let similarity = cosine_similarity(t_emb, d_emb);
                if similarity > self.config.similarity_threshold {
                    pairs.push(ScoredPair {
                        timeline_idx: ti,
                        document_idx: di,
                        similarity,
                    });
                }
            }
        }

        // Stable sort keeps chunk-rank order among equal similarities.
        pairs.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        pairs.truncate(self.config.max_pairs);
        Ok(pairs)
    }

    /// One sentence per fact, assembled without a generative call.
    fn summarize(
        &self,
        pairs: &[ScoredPair],
        timeline_chunks: &[TimelineChunk],
        document_chunks: &[DocumentChunk],
    ) -> String {
        let mut parts = Vec::new();

        if !timeline_chunks.is_empty() {
            let mut dates: Vec<_> = timeline_chunks.iter().map(|c| c.date).collect();
            dates.sort();
            dates.dedup();
            let shown: Vec<String> = dates
                .iter()
                .take(3)
                .map(|d| d.format("%b %d").to_string())
                .collect();
            parts.push(format!("Found timeline events from {}", shown.join(", ")));
        }

        if !document_chunks.is_empty() {
            let mut titles: Vec<&str> = Vec::new();
            for chunk in document_chunks {
                if !titles.contains(&chunk.source_title.as_str()) {
                    titles.push(&chunk.source_title);
                }
            }
            titles.truncate(3);
            parts.push(format!("Found relevant documents: {}", titles.join(", ")));
        }

        if !pairs.is_empty() {
            parts.push(format!(
                "Identified {} strong connections between timeline and documents",
                pairs.len()
            ));
        }

        format!("{}.", parts.join(". "))
    }

    fn merge_context(
        &self,
        pairs: &[ScoredPair],
        timeline_chunks: &[TimelineChunk],
        document_chunks: &[DocumentChunk],
    ) -> MergedContext {
        let mut context = MergedContext::default();

        context.push_section(
            SectionLabel::TimelineEvents,
            timeline_chunks
                .iter()
                .take(self.config.max_context_chunks)
                .map(|c| format!("[{}] {}", c.date.format("%Y-%m-%d"), self.snippet(&c.text)))
                .collect(),
        );

        context.push_section(
            SectionLabel::Documents,
            document_chunks
                .iter()
                .take(self.config.max_context_chunks)
                .map(|c| format!("[{}] {}", c.source_title, self.snippet(&c.text)))
                .collect(),
        );

        context.push_section(
            SectionLabel::Connections,
            pairs
                .iter()
                .take(self.config.max_context_pairs)
                .map(|p| {
                    format!(
                        "Timeline ({}) relates to Document ({}): similarity {:.2}",
                        timeline_chunks[p.timeline_idx].date,
                        document_chunks[p.document_idx].source_title,
                        p.similarity
                    )
                })
                .collect(),
        );

        context
    }

    /// Leading snippet of a chunk, cut on a char boundary.
    fn snippet(&self, text: &str) -> String {
        text.chars().take(self.config.snippet_chars).collect()
    }
}
