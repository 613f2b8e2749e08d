//! Timeline retrieval: temporally scoped, similarity-ranked events.

use tracing::{debug, info};

use recall_core::config::RetrievalConfig;
use recall_core::errors::{QueryError, RecallResult};
use recall_core::models::{Modality, QueryContext, QueryPlan, TimelineChunk};
use recall_core::traits::{EventStore, GenerationProvider, Purpose};
use recall_generation::GenerationClient;

use crate::rank;

/// Retrieves timeline events (audio, meetings, notes) for a question.
///
/// Candidates are narrowed by the plan's temporal scope before any
/// similarity work; an unscoped plan falls back to the configured
/// lookback window. An empty candidate set is an answerable outcome,
/// not an error, and skips the embedding call entirely.
pub struct TimelineRetrievalAgent<'a, P> {
    store: &'a dyn EventStore,
    client: &'a GenerationClient<P>,
    config: RetrievalConfig,
}

impl<'a, P: GenerationProvider> TimelineRetrievalAgent<'a, P> {
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

    pub async fn retrieve(
        &self,
        question: &str,
        plan: &QueryPlan,
        ctx: &QueryContext,
    ) -> RecallResult<Vec<TimelineChunk>> {
        let filter = plan
            .temporal_scope
            .to_filter(ctx.current_date, self.config.lookback_days);
        debug!(?filter, focus = ?ctx.focus_source, "timeline retrieval starting");

        let candidates = self.store.events_for_user(
            ctx.user_id,
            Modality::Timeline,
            &filter,
            ctx.focus_source,
        )?;
        if candidates.is_empty() {
            debug!("no timeline events within the temporal scope");
            return Ok(Vec::new());
        }

        let query_embedding = self
            .client
            .embed(question)
            .await
            .map_err(|e| QueryError::generation(Purpose::QueryEmbedding, e))?;

        let ranked =
            rank::rank_by_similarity(self.store, candidates, &query_embedding, ctx.current_date)?;

        let chunks: Vec<TimelineChunk> = ranked
            .into_iter()
            .take(self.config.top_k)
            .map(|scored| TimelineChunk {
                event_id: scored.event.id,
                text: scored.event.text,
                date: scored.event.date,
                relevance_score: scored.similarity,
            })
            .collect();

        info!(chunks = chunks.len(), "timeline retrieval complete");
        Ok(chunks)
    }
}
