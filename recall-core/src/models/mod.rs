//! Typed records flowing between pipeline stages.
//!
//! Every agent boundary exchanges one of these fixed-field structs;
//! nothing here is an open-ended key/value map.

mod alignment;
mod chunk;
mod confidence;
mod context;
mod event;
mod ids;
mod plan;
mod query_answer;
mod query_context;
mod temporal;

pub use alignment::{AlignedPair, AlignmentOutput};
pub use chunk::{DocumentChunk, TimelineChunk};
pub use confidence::Confidence;
pub use context::{ContextSection, MergedContext, SectionLabel};
pub use event::{Event, Modality, Source, SourceKind};
pub use ids::{EntityId, EventId, SourceId, UserId};
pub use plan::{QueryPlan, DEFAULT_SUBTASKS};
pub use query_answer::QueryAnswer;
pub use query_context::QueryContext;
pub use temporal::{DateFilter, TemporalScope};
