//! Similarity ranking with deterministic tie-breaks.

use std::cmp::Ordering;

use chrono::NaiveDate;

use recall_core::embedding::cosine_similarity;
use recall_core::errors::RecallResult;
use recall_core::models::Event;
use recall_core::traits::EventStore;

/// An event scored against the question embedding.
#[derive(Debug, Clone)]
pub struct ScoredEvent {
    pub event: Event,
    pub similarity: f64,
}

/// Rank candidates by cosine similarity against the question embedding.
///
/// Events without a stored embedding are skipped. Ordering is fully
/// deterministic: similarity descending, then date recency (closer to
/// `today` first), then event id ascending.
pub fn rank_by_similarity(
    store: &dyn EventStore,
    candidates: Vec<Event>,
    query_embedding: &[f32],
    today: NaiveDate,
) -> RecallResult<Vec<ScoredEvent>> {
    let mut scored = Vec::with_capacity(candidates.len());
    for event in candidates {
        let Some(embedding) = store.embedding_of(event.id)? else {
            continue;
        };
        let similarity = cosine_similarity(query_embedding, &embedding);
        scored.push(ScoredEvent { event, similarity });
    }
    sort_scored(&mut scored, today);
    Ok(scored)
}

fn sort_scored(scored: &mut [ScoredEvent], today: NaiveDate) {
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| date_distance(a, today).cmp(&date_distance(b, today)))
            .then_with(|| a.event.id.cmp(&b.event.id))
    });
}

fn date_distance(scored: &ScoredEvent, today: NaiveDate) -> i64 {
    (today - scored.event.date).num_days().abs()
}
