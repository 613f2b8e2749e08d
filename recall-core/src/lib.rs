//! # recall-core
//!
//! Foundation crate for the Recall query pipeline.
//! Defines all types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod embedding;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RecallConfig;
pub use errors::{QueryError, RecallResult};
pub use models::{Confidence, Event, Modality, QueryAnswer, QueryContext, QueryPlan};
