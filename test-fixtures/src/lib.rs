//! Shared test doubles for the Recall workspace.
//!
//! Provides an in-memory [`EventStore`], a scripted
//! [`GenerationProvider`] with per-purpose reply queues and a call log,
//! and builders for events and sources. Used by integration tests
//! across crates.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};

use recall_core::errors::{GenerationError, RecallResult, StoreError};
use recall_core::models::{
    DateFilter, EntityId, Event, EventId, Modality, Source, SourceId, SourceKind, UserId,
};
use recall_core::traits::{EventStore, GenerationProvider, Purpose};

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date in tests.
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap_or_else(|e| panic!("bad test date {s}: {e}"))
}

/// A standard-basis embedding: 1.0 at `axis`, zero elsewhere.
///
/// Orthogonal axes give exact similarity 0.0 and identical axes give
/// 1.0, which makes ranking assertions deterministic.
pub fn basis(axis: usize, dims: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[axis] = 1.0;
    v
}

/// A blend of two basis axes, normalized. Similarity against `basis(a)`
/// is `wa / sqrt(wa² + wb²)`.
pub fn blend(a: usize, wa: f32, b: usize, wb: f32, dims: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[a] = wa;
    v[b] = wb;
    v
}

/// Build an event owned by `user` and `source`.
pub fn event(user: UserId, source: SourceId, kind: SourceKind, day: &str, text: &str) -> Event {
    Event {
        id: EventId::new(),
        user_id: user,
        source_id: source,
        kind,
        text: text.to_string(),
        chunk_index: 0,
        date: date(day),
        timestamp: None,
    }
}

/// Build a source owned by `user`.
pub fn source(user: UserId, kind: SourceKind, title: &str) -> Source {
    Source {
        id: SourceId::new(),
        user_id: user,
        kind,
        title: title.to_string(),
        created_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// In-memory event store
// ---------------------------------------------------------------------------

/// An append-only in-memory [`EventStore`].
#[derive(Default)]
pub struct InMemoryEventStore {
    events: Vec<Event>,
    embeddings: HashMap<EventId, Vec<f32>>,
    entities: HashMap<EventId, HashSet<EntityId>>,
    sources: HashMap<SourceId, Source>,
    /// When true, every read fails with `StoreError::Unavailable`.
    unavailable: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read fails, for exercising the fatal path.
    pub fn broken() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn add_source(&mut self, source: Source) -> SourceId {
        let id = source.id;
        self.sources.insert(id, source);
        id
    }

    pub fn add_event(&mut self, event: Event) -> EventId {
        let id = event.id;
        self.events.push(event);
        id
    }

    /// Add an event together with its stored embedding.
    pub fn add_embedded_event(&mut self, event: Event, embedding: Vec<f32>) -> EventId {
        let id = self.add_event(event);
        self.embeddings.insert(id, embedding);
        id
    }

    pub fn link_entities(&mut self, event: EventId, entities: impl IntoIterator<Item = EntityId>) {
        self.entities.entry(event).or_default().extend(entities);
    }

    fn check_available(&self) -> RecallResult<()> {
        if self.unavailable {
            Err(StoreError::unavailable("simulated store outage").into())
        } else {
            Ok(())
        }
    }
}

impl EventStore for InMemoryEventStore {
    fn events_for_user(
        &self,
        user: UserId,
        modality: Modality,
        filter: &DateFilter,
        source: Option<SourceId>,
    ) -> RecallResult<Vec<Event>> {
        self.check_available()?;
        Ok(self
            .events
            .iter()
            .filter(|e| e.user_id == user)
            .filter(|e| e.modality() == modality)
            .filter(|e| filter.contains(e.date))
            .filter(|e| source.map_or(true, |s| e.source_id == s))
            .cloned()
            .collect())
    }

    fn embedding_of(&self, event: EventId) -> RecallResult<Option<Vec<f32>>> {
        self.check_available()?;
        Ok(self.embeddings.get(&event).cloned())
    }

    fn entities_of(&self, event: EventId) -> RecallResult<HashSet<EntityId>> {
        self.check_available()?;
        Ok(self.entities.get(&event).cloned().unwrap_or_default())
    }

    fn source(&self, id: SourceId) -> RecallResult<Option<Source>> {
        self.check_available()?;
        Ok(self.sources.get(&id).cloned())
    }
}

// ---------------------------------------------------------------------------
// Scripted generation provider
// ---------------------------------------------------------------------------

/// One scripted outcome for a `complete` call.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Text(String),
    Transient(String),
    Fatal(String),
}

/// A [`GenerationProvider`] that replays queued replies per purpose and
/// records every call it receives.
///
/// `complete` pops the queue for the call's purpose; an empty queue is
/// a fatal failure so tests notice unexpected extra calls. `embed`
/// always returns the configured question embedding.
pub struct ScriptedProvider {
    replies: Mutex<HashMap<Purpose, VecDeque<ScriptedReply>>>,
    calls: Mutex<Vec<Purpose>>,
    question_embedding: Vec<f32>,
}

impl ScriptedProvider {
    pub fn new(question_embedding: Vec<f32>) -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            question_embedding,
        }
    }

    /// Queue a reply for calls with the given purpose.
    pub fn push(&self, purpose: Purpose, reply: ScriptedReply) {
        self.replies
            .lock()
            .unwrap()
            .entry(purpose)
            .or_default()
            .push_back(reply);
    }

    pub fn push_text(&self, purpose: Purpose, text: &str) {
        self.push(purpose, ScriptedReply::Text(text.to_string()));
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Purpose> {
        self.calls.lock().unwrap().clone()
    }

    /// How many calls had the given purpose.
    pub fn call_count(&self, purpose: Purpose) -> usize {
        self.calls.lock().unwrap().iter().filter(|p| **p == purpose).count()
    }
}

impl GenerationProvider for ScriptedProvider {
    async fn complete(&self, _prompt: &str, purpose: Purpose) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(purpose);
        let next = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&purpose)
            .and_then(|q| q.pop_front());
        match next {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Transient(reason)) => Err(GenerationError::transient(reason)),
            Some(ScriptedReply::Fatal(reason)) => Err(GenerationError::fatal(reason)),
            None => Err(GenerationError::fatal(format!(
                "no scripted reply for {purpose}"
            ))),
        }
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, GenerationError> {
        self.calls.lock().unwrap().push(Purpose::QueryEmbedding);
        Ok(self.question_embedding.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
