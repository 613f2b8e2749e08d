//! Property tests for the alignment engine.

use proptest::prelude::*;
use recall_alignment::AlignmentEngine;
use recall_core::config::AlignmentConfig;
use recall_core::models::{DocumentChunk, SourceKind, TimelineChunk, UserId};
use test_fixtures::{blend, date, event, source, InMemoryEventStore};

const DIMS: usize = 4;

fn arb_weights(max: usize) -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((0.0f32..10.0, 0.1f32..10.0), 0..max)
}

fn build(
    timeline_weights: &[(f32, f32)],
    document_weights: &[(f32, f32)],
) -> (InMemoryEventStore, Vec<TimelineChunk>, Vec<DocumentChunk>) {
    let user = UserId::new();
    let mut store = InMemoryEventStore::new();
    let meetings = store.add_source(source(user, SourceKind::Meeting, "Meetings"));
    let docs = store.add_source(source(user, SourceKind::Pdf, "Docs"));

    let timeline = timeline_weights
        .iter()
        .enumerate()
        .map(|(i, &(wa, wb))| {
            let id = store.add_embedded_event(
                event(user, meetings, SourceKind::Meeting, "2024-01-09", "t"),
                blend(0, wa, 1, wb, DIMS),
            );
            TimelineChunk {
                event_id: id,
                text: format!("t{i}"),
                date: date("2024-01-09"),
                relevance_score: 0.9,
            }
        })
        .collect();

    let documents = document_weights
        .iter()
        .enumerate()
        .map(|(i, &(wa, wb))| {
            let id = store.add_embedded_event(
                event(user, docs, SourceKind::Pdf, "2024-01-05", "d"),
                blend(0, wa, 1, wb, DIMS),
            );
            DocumentChunk {
                event_id: id,
                text: format!("d{i}"),
                source_title: "Docs".to_string(),
                relevance_score: 0.9,
            }
        })
        .collect();

    (store, timeline, documents)
}

proptest! {
    #[test]
    fn aligned_pairs_are_unique_above_threshold_and_bounded(
        timeline_weights in arb_weights(8),
        document_weights in arb_weights(8),
    ) {
        let (store, timeline, documents) = build(&timeline_weights, &document_weights);
        let config = AlignmentConfig::default();
        let threshold = config.similarity_threshold;
        let max_pairs = config.max_pairs;

        let output = AlignmentEngine::new(&store, config)
            .align(&timeline, &documents)
            .unwrap();

        prop_assert!(output.aligned_pairs.len() <= max_pairs);
        let mut seen = std::collections::HashSet::new();
        for pair in &output.aligned_pairs {
            prop_assert!(pair.similarity > threshold);
            prop_assert!(seen.insert((pair.timeline_event, pair.document_event)));
        }
        for window in output.aligned_pairs.windows(2) {
            prop_assert!(window[0].similarity >= window[1].similarity);
        }
    }

    #[test]
    fn alignment_is_deterministic(
        timeline_weights in arb_weights(6),
        document_weights in arb_weights(6),
    ) {
        let (store, timeline, documents) = build(&timeline_weights, &document_weights);

        let a = AlignmentEngine::new(&store, AlignmentConfig::default())
            .align(&timeline, &documents)
            .unwrap();
        let b = AlignmentEngine::new(&store, AlignmentConfig::default())
            .align(&timeline, &documents)
            .unwrap();
        prop_assert_eq!(a, b);
    }
}
