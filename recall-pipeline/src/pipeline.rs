//! The orchestrator: one call from question to answer.

use tracing::{debug, info};

use recall_alignment::AlignmentEngine;
use recall_core::config::RecallConfig;
use recall_core::models::{QueryAnswer, QueryContext};
use recall_core::traits::{EventStore, GenerationProvider};
use recall_generation::GenerationClient;
use recall_planner::Planner;
use recall_retrieval::{DocumentRetrievalAgent, TimelineRetrievalAgent};
use recall_synthesis::Synthesizer;

use crate::stage::{PipelineError, Stage};

/// Runs the agent sequence for a question:
/// Planner, then the two retrieval agents concurrently, then alignment,
/// then synthesis.
///
/// Per-query state is owned by the `answer_question` call; a single
/// pipeline serves arbitrarily many concurrent queries. Dropping the
/// returned future cancels the query cleanly since every stage only
/// reads.
pub struct QueryPipeline<'a, P> {
    store: &'a dyn EventStore,
    client: GenerationClient<P>,
    config: RecallConfig,
}

impl<'a, P: GenerationProvider> QueryPipeline<'a, P> {
    pub fn new(store: &'a dyn EventStore, provider: P, config: RecallConfig) -> Self {
        let client = GenerationClient::new(provider, config.generation.clone());
        Self {
            store,
            client,
            config,
        }
    }

    pub async fn answer_question(
        &self,
        ctx: &QueryContext,
        question: &str,
    ) -> Result<QueryAnswer, PipelineError> {
        info!(user = %ctx.user_id, date = %ctx.current_date, "answering question");

        // Planning never aborts a query on its own; it degrades.
        let planner = Planner::new(&self.client, self.config.planner.clone());
        let plan = planner.plan(question, ctx.current_date).await;
        debug!(scope = ?plan.temporal_scope, degraded = plan.degraded, "planning complete");

        let timeline_agent =
            TimelineRetrievalAgent::new(self.store, &self.client, self.config.retrieval.clone());
        let document_agent =
            DocumentRetrievalAgent::new(self.store, &self.client, self.config.retrieval.clone());

        // The branches are independent until the entity boost; the
        // first fatal error cancels the sibling.
        let (timeline_chunks, document_candidates) = tokio::try_join!(
            async {
                timeline_agent
                    .retrieve(question, &plan, ctx)
                    .await
                    .map_err(|e| PipelineError::new(Stage::TimelineRetrieval, e))
            },
            async {
                document_agent
                    .gather(question, ctx)
                    .await
                    .map_err(|e| PipelineError::new(Stage::DocumentRetrieval, e))
            },
        )?;

        let document_chunks = document_agent
            .finalize(document_candidates, &timeline_chunks)
            .map_err(|e| PipelineError::new(Stage::DocumentRetrieval, e))?;
        debug!(
            timeline = timeline_chunks.len(),
            documents = document_chunks.len(),
            "retrieval complete"
        );

        let alignment = AlignmentEngine::new(self.store, self.config.alignment.clone())
            .align(&timeline_chunks, &document_chunks)
            .map_err(|e| PipelineError::new(Stage::Alignment, e))?;

        let synthesizer = Synthesizer::new(&self.client, self.config.synthesis.clone());
        let answer = synthesizer
            .synthesize(question, &plan, timeline_chunks, document_chunks, &alignment)
            .await
            .map_err(|e| PipelineError::new(Stage::Synthesis, e))?;

        info!(confidence = %answer.confidence, "query answered");
        Ok(answer)
    }
}
