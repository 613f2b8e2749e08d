use std::collections::HashSet;

use crate::errors::RecallResult;
use crate::models::{DateFilter, EntityId, Event, EventId, Modality, Source, SourceId, UserId};

/// Read access to the external Event Store.
///
/// The pipeline never writes: the store is append-only and events are
/// immutable, so snapshot-at-dispatch reads are sufficient and queries
/// can be cancelled at any point without residue.
pub trait EventStore: Send + Sync {
    /// List a user's events of one modality within a date filter,
    /// optionally restricted to a single source. Returned order is
    /// unspecified; ranking is the retrieval agents' job.
    fn events_for_user(
        &self,
        user: UserId,
        modality: Modality,
        filter: &DateFilter,
        source: Option<SourceId>,
    ) -> RecallResult<Vec<Event>>;

    /// The stored embedding for an event, if one was created at
    /// ingestion. Events without embeddings are skipped by ranking.
    fn embedding_of(&self, event: EventId) -> RecallResult<Option<Vec<f32>>>;

    /// Entities linked to an event, for overlap boosting.
    fn entities_of(&self, event: EventId) -> RecallResult<HashSet<EntityId>>;

    /// Look up a source for its title and kind.
    fn source(&self, id: SourceId) -> RecallResult<Option<Source>>;
}
