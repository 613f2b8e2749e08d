use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{EventId, SourceId, UserId};

/// Which retrieval agent may select an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Time-anchored events (recordings, meetings, notes).
    Timeline,
    /// Reference material (PDFs, web pages).
    Document,
}

/// The kind of source an event was ingested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Audio,
    Meeting,
    Note,
    Pdf,
    Webpage,
}

impl SourceKind {
    /// Modality classification controlling retrieval eligibility.
    pub fn modality(self) -> Modality {
        match self {
            SourceKind::Audio | SourceKind::Meeting | SourceKind::Note => Modality::Timeline,
            SourceKind::Pdf | SourceKind::Webpage => Modality::Document,
        }
    }
}

/// One normalized chunk of ingested source text.
///
/// Events are immutable once created and owned by exactly one user and
/// one source. The pipeline only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub user_id: UserId,
    pub source_id: SourceId,
    pub kind: SourceKind,
    /// The text content of this chunk.
    pub text: String,
    /// Position of this chunk within its source (0-indexed).
    pub chunk_index: u32,
    /// Calendar date the event is bucketed under.
    pub date: NaiveDate,
    /// Finer-grained timestamp where the source provided one.
    pub timestamp: Option<DateTime<Utc>>,
}

impl Event {
    pub fn modality(&self) -> Modality {
        self.kind.modality()
    }
}

/// An ingested file or URL owning zero-or-more events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub user_id: UserId,
    pub kind: SourceKind,
    pub title: String,
    pub created_at: DateTime<Utc>,
}
