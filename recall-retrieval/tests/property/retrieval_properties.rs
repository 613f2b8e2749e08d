//! Property tests for the shared similarity ranking.

use chrono::NaiveDate;
use proptest::prelude::*;
use recall_core::models::{SourceKind, UserId};
use recall_retrieval::rank;
use test_fixtures::{blend, date, event, source, InMemoryEventStore};

const DIMS: usize = 4;

/// Weight pairs that turn into normalized two-axis embeddings.
fn arb_weights() -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((0.0f32..10.0, 0.1f32..10.0), 0..30)
}

fn populated_store(user: UserId, weights: &[(f32, f32)]) -> InMemoryEventStore {
    let mut store = InMemoryEventStore::new();
    let src = store.add_source(source(user, SourceKind::Note, "Notes"));
    for (i, &(wa, wb)) in weights.iter().enumerate() {
        store.add_embedded_event(
            event(user, src, SourceKind::Note, "2024-01-10", &format!("note {i}")),
            blend(0, wa, 1, wb, DIMS),
        );
    }
    store
}

fn all_events(store: &InMemoryEventStore, user: UserId) -> Vec<recall_core::models::Event> {
    use recall_core::models::{DateFilter, Modality};
    use recall_core::traits::EventStore;
    store
        .events_for_user(user, Modality::Timeline, &DateFilter::Any, None)
        .unwrap()
}

fn today() -> NaiveDate {
    date("2024-01-15")
}

proptest! {
    #[test]
    fn ranking_is_sorted_by_descending_similarity(weights in arb_weights()) {
        let user = UserId::new();
        let store = populated_store(user, &weights);
        let query = test_fixtures::basis(0, DIMS);

        let ranked =
            rank::rank_by_similarity(&store, all_events(&store, user), &query, today()).unwrap();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn ranking_is_deterministic(weights in arb_weights()) {
        let user = UserId::new();
        let store = populated_store(user, &weights);
        let query = test_fixtures::basis(0, DIMS);
        let events = all_events(&store, user);

        let a = rank::rank_by_similarity(&store, events.clone(), &query, today()).unwrap();
        let b = rank::rank_by_similarity(&store, events, &query, today()).unwrap();
        let ids_a: Vec<_> = a.iter().map(|s| s.event.id).collect();
        let ids_b: Vec<_> = b.iter().map(|s| s.event.id).collect();
        prop_assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn ranking_never_grows_the_candidate_set(weights in arb_weights()) {
        let user = UserId::new();
        let store = populated_store(user, &weights);
        let query = test_fixtures::basis(0, DIMS);
        let events = all_events(&store, user);
        let count = events.len();

        let ranked = rank::rank_by_similarity(&store, events, &query, today()).unwrap();
        prop_assert!(ranked.len() <= count);
    }
}
