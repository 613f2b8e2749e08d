//! # recall-retrieval
//!
//! The two retrieval agents of the query pipeline.
//!
//! Timeline retrieval narrows events by temporal scope and ranks by
//! similarity to the question; document retrieval ranks document and
//! webpage events by similarity and boosts chunks sharing entities
//! with the timeline results. Both produce small, deterministic,
//! top-k chunk lists.

pub mod document;
pub mod rank;
pub mod timeline;

pub use document::{DocumentCandidates, DocumentRetrievalAgent};
pub use timeline::TimelineRetrievalAgent;
