//! Document retrieval: similarity candidates, then an entity-overlap
//! boost against the timeline results.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, info};

use recall_core::config::RetrievalConfig;
use recall_core::errors::{QueryError, RecallResult};
use recall_core::models::{DateFilter, DocumentChunk, Modality, QueryContext, TimelineChunk};
use recall_core::traits::{EventStore, GenerationProvider, Purpose};
use recall_generation::GenerationClient;

use crate::rank::{self, ScoredEvent};

/// Similarity-ranked document candidates awaiting the entity boost.
///
/// Produced by [`DocumentRetrievalAgent::gather`], which has no
/// dependency on the timeline agent and can run concurrently with it.
#[derive(Debug)]
pub struct DocumentCandidates {
    scored: Vec<ScoredEvent>,
}

impl DocumentCandidates {
    pub fn is_empty(&self) -> bool {
        self.scored.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scored.len()
    }
}

/// Retrieves document events (PDFs, webpages) for a question.
///
/// Runs in two phases: `gather` fetches and similarity-ranks an
/// over-sized candidate set without consulting the timeline, and
/// `finalize` re-ranks those candidates once the timeline chunks are
/// known, boosting candidates that mention the same entities.
pub struct DocumentRetrievalAgent<'a, P> {
    store: &'a dyn EventStore,
    client: &'a GenerationClient<P>,
    config: RetrievalConfig,
}

impl<'a, P: GenerationProvider> DocumentRetrievalAgent<'a, P> {
    pub fn new(
        store: &'a dyn EventStore,
        client: &'a GenerationClient<P>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    /// Fetch and similarity-rank document candidates.
    ///
    /// Documents are not date-filtered: a report written months ago can
    /// still answer today's question. Keeps `top_k * candidate_multiplier`
    /// candidates so the boost has room to reorder.
    pub async fn gather(
        &self,
        question: &str,
        ctx: &QueryContext,
    ) -> RecallResult<DocumentCandidates> {
        let candidates = self.store.events_for_user(
            ctx.user_id,
            Modality::Document,
            &DateFilter::Any,
            ctx.focus_source,
        )?;
        if candidates.is_empty() {
            debug!("no document events for user");
            return Ok(DocumentCandidates { scored: Vec::new() });
        }

        let query_embedding = self
            .client
            .embed(question)
            .await
            .map_err(|e| QueryError::generation(Purpose::QueryEmbedding, e))?;

        let mut scored =
            rank::rank_by_similarity(self.store, candidates, &query_embedding, ctx.current_date)?;
        scored.truncate(self.config.top_k * self.config.candidate_multiplier);

        debug!(candidates = scored.len(), "document candidates gathered");
        Ok(DocumentCandidates { scored })
    }

    /// Boost candidates that share entities with the timeline chunks,
    /// then keep the top k.
    ///
    /// Boosted score is `similarity + entity_boost_weight * shared`,
    /// where `shared` counts entities the candidate has in common with
    /// the union of the timeline chunks' entities. With no timeline
    /// chunks the similarity order stands unchanged.
    pub fn finalize(
        &self,
        candidates: DocumentCandidates,
        timeline_chunks: &[TimelineChunk],
    ) -> RecallResult<Vec<DocumentChunk>> {
        if candidates.scored.is_empty() {
            return Ok(Vec::new());
        }

        let mut timeline_entities = HashSet::new();
        for chunk in timeline_chunks {
            timeline_entities.extend(self.store.entities_of(chunk.event_id)?);
        }

        let mut boosted = Vec::with_capacity(candidates.scored.len());
        for scored in candidates.scored {
            let shared = if timeline_entities.is_empty() {
                0
            } else {
                self.store
                    .entities_of(scored.event.id)?
                    .intersection(&timeline_entities)
                    .count()
            };
            let score = scored.similarity + self.config.entity_boost_weight * shared as f64;
            boosted.push((scored, score));
        }

        boosted.sort_by(|(a, score_a), (b, score_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.similarity
                        .partial_cmp(&a.similarity)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.event.id.cmp(&b.event.id))
        });
        boosted.truncate(self.config.top_k);

        let mut chunks = Vec::with_capacity(boosted.len());
        for (scored, score) in boosted {
            let source_title = self
                .store
                .source(scored.event.source_id)?
                .map(|s| s.title)
                .unwrap_or_default();
            chunks.push(DocumentChunk {
                event_id: scored.event.id,
                text: scored.event.text,
                source_title,
                relevance_score: score,
            });
        }

        info!(chunks = chunks.len(), "document retrieval complete");
        Ok(chunks)
    }
}
