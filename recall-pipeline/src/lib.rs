//! # recall-pipeline
//!
//! The orchestrator: wires the Planner, the two retrieval agents, the
//! alignment engine, and the synthesizer into one `answer_question`
//! call. The retrieval branches run concurrently; any fatal error
//! aborts the query tagged with the stage it happened in.

pub mod pipeline;
pub mod stage;

pub use pipeline::QueryPipeline;
pub use stage::{PipelineError, Stage};
