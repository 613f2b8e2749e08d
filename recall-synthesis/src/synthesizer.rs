//! Draft, self-check, and bounded regeneration.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, warn};

use recall_core::config::SynthesisConfig;
use recall_core::errors::{QueryError, RecallResult};
use recall_core::models::{
    AlignmentOutput, Confidence, DocumentChunk, QueryAnswer, QueryPlan, TimelineChunk,
};
use recall_core::traits::{GenerationProvider, Purpose};
use recall_generation::json::extract_json;
use recall_generation::GenerationClient;

use crate::prompts;

/// Deterministic answer when both retrieval branches came back empty.
/// Surfaced with zero confidence and no generative call.
pub const INSUFFICIENT_CONTEXT_ANSWER: &str =
    "I couldn't find any relevant information in your memories to answer this question. \
     Try rephrasing it or asking about a different time period.";

/// Self-check verdict parsed from the model's JSON reply.
#[derive(Debug, Deserialize)]
struct CheckVerdict {
    #[serde(default = "default_adequate")]
    adequate: bool,
    #[serde(default)]
    feedback: String,
}

fn default_adequate() -> bool {
    true
}

/// Produces the final [`QueryAnswer`] from the merged context.
///
/// The self-correction loop is strictly bounded: one draft, then at
/// most `max_regenerations` check-and-regenerate rounds, and the last
/// draft is accepted unconditionally. A self-check that fails to run
/// or to parse counts as a pass; only draft generation failures abort
/// the query.
pub struct Synthesizer<'a, P> {
    client: &'a GenerationClient<P>,
    config: SynthesisConfig,
}

impl<'a, P: GenerationProvider> Synthesizer<'a, P> {
    pub fn new(client: &'a GenerationClient<P>, config: SynthesisConfig) -> Self {
        Self { client, config }
    }

    pub async fn synthesize(
        &self,
        question: &str,
        plan: &QueryPlan,
        timeline_chunks: Vec<TimelineChunk>,
        document_chunks: Vec<DocumentChunk>,
        alignment: &AlignmentOutput,
    ) -> RecallResult<QueryAnswer> {
        if timeline_chunks.is_empty() && document_chunks.is_empty() {
            debug!("no retrieved context, returning the insufficient-context answer");
            return Ok(QueryAnswer {
                answer: INSUFFICIENT_CONTEXT_ANSWER.to_string(),
                timeline_chunks,
                document_chunks,
                dates_used: Vec::new(),
                confidence: Confidence::none(),
            });
        }

        let mut answer = self
            .client
            .complete(&prompts::answer_prompt(question, plan, alignment), Purpose::AnswerDraft)
            .await
            .map_err(|e| QueryError::generation(Purpose::AnswerDraft, e))?;

        let mut regenerated = false;
        for round in 1..=self.config.max_regenerations {
            let verdict = self.self_check(question, plan, &answer).await;
            if verdict.adequate {
                break;
            }
            debug!(round, feedback = %verdict.feedback, "self-check failed, regenerating");
            answer = self
                .client
                .complete(
                    &prompts::regenerate_prompt(question, &answer, &verdict.feedback, alignment),
                    Purpose::AnswerDraft,
                )
                .await
                .map_err(|e| QueryError::generation(Purpose::AnswerDraft, e))?;
            regenerated = true;
        }

        let confidence = self.confidence(&timeline_chunks, &document_chunks, regenerated);
        let dates_used = dates_used(&timeline_chunks);

        info!(%confidence, regenerated, "synthesis complete");
        Ok(QueryAnswer {
            answer,
            timeline_chunks,
            document_chunks,
            dates_used,
            confidence,
        })
    }

    /// Run the self-check; any failure to run or parse counts as a pass.
    async fn self_check(&self, question: &str, plan: &QueryPlan, answer: &str) -> CheckVerdict {
        let reply = match self
            .client
            .complete(&prompts::check_prompt(question, plan, answer), Purpose::SelfCheck)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "self-check call failed, accepting the draft");
                return CheckVerdict {
                    adequate: true,
                    feedback: String::new(),
                };
            }
        };

        extract_json(&reply)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_else(|| {
                warn!("self-check reply was not valid JSON, accepting the draft");
                CheckVerdict {
                    adequate: true,
                    feedback: String::new(),
                }
            })
    }

    /// Confidence grounded in the retrieval evidence: a floor of 0.25
    /// plus the mean of the clamped chunk scores, discounted when the
    /// draft needed a regeneration.
    fn confidence(
        &self,
        timeline_chunks: &[TimelineChunk],
        document_chunks: &[DocumentChunk],
        regenerated: bool,
    ) -> Confidence {
        let scores: Vec<f64> = timeline_chunks
            .iter()
            .map(|c| c.relevance_score)
            .chain(document_chunks.iter().map(|c| c.relevance_score))
            .map(|s| s.clamp(0.0, 1.0))
            .collect();
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;

        let base = Confidence::new(0.25 + 0.75 * mean);
        if regenerated {
            base * self.config.regeneration_penalty
        } else {
            base
        }
    }
}

/// Dates of the contributing timeline chunks, sorted and deduplicated.
fn dates_used(timeline_chunks: &[TimelineChunk]) -> Vec<NaiveDate> {
    let mut dates: Vec<_> = timeline_chunks.iter().map(|c| c.date).collect();
    dates.sort();
    dates.dedup();
    dates
}
