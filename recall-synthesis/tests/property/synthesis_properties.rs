//! Property tests for synthesis outputs.

use proptest::prelude::*;
use recall_core::config::{GenerationConfig, SynthesisConfig};
use recall_core::models::{
    AlignmentOutput, DocumentChunk, EventId, MergedContext, QueryPlan, TemporalScope,
    TimelineChunk,
};
use recall_core::traits::Purpose;
use recall_generation::GenerationClient;
use recall_synthesis::Synthesizer;
use test_fixtures::{basis, date, ScriptedProvider};

fn arb_timeline_chunks() -> impl Strategy<Value = Vec<TimelineChunk>> {
    prop::collection::vec((-2.0f64..3.0, 0i64..60), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(score, day_offset)| TimelineChunk {
                event_id: EventId::new(),
                text: "t".to_string(),
                date: date("2024-01-01") + chrono::Duration::days(day_offset),
                relevance_score: score,
            })
            .collect()
    })
}

fn arb_document_chunks() -> impl Strategy<Value = Vec<DocumentChunk>> {
    prop::collection::vec(-2.0f64..3.0, 0..12).prop_map(|scores| {
        scores
            .into_iter()
            .map(|score| DocumentChunk {
                event_id: EventId::new(),
                text: "d".to_string(),
                source_title: "Doc".to_string(),
                relevance_score: score,
            })
            .collect()
    })
}

fn synthesize(
    timeline: Vec<TimelineChunk>,
    documents: Vec<DocumentChunk>,
) -> recall_core::models::QueryAnswer {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push_text(Purpose::AnswerDraft, "answer");
    provider.push_text(Purpose::SelfCheck, r#"{"adequate": true}"#);
    let client = GenerationClient::new(&provider, GenerationConfig::default());
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());
    let alignment = AlignmentOutput {
        aligned_pairs: Vec::new(),
        summary: String::new(),
        context: MergedContext::default(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    runtime
        .block_on(synthesizer.synthesize(
            "question",
            &QueryPlan::degraded(TemporalScope::Unscoped),
            timeline,
            documents,
            &alignment,
        ))
        .unwrap()
}

proptest! {
    #[test]
    fn confidence_stays_within_unit_bounds(
        timeline in arb_timeline_chunks(),
        documents in arb_document_chunks(),
    ) {
        let answer = synthesize(timeline, documents);
        let confidence = answer.confidence.value();
        prop_assert!((0.0..=1.0).contains(&confidence));
    }

    #[test]
    fn dates_used_are_a_sorted_dedup_subset_of_chunk_dates(
        timeline in arb_timeline_chunks(),
        documents in arb_document_chunks(),
    ) {
        let chunk_dates: std::collections::HashSet<_> =
            timeline.iter().map(|c| c.date).collect();
        let answer = synthesize(timeline, documents);

        for window in answer.dates_used.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for used in &answer.dates_used {
            prop_assert!(chunk_dates.contains(used));
        }
    }
}
