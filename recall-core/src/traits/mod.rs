//! Capability interfaces the pipeline consumes.

mod generation;
mod store;

pub use generation::{GenerationProvider, Purpose};
pub use store::EventStore;
