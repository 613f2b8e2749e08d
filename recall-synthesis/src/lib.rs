//! # recall-synthesis
//!
//! The last stage of the pipeline: turns the merged context into a
//! final answer. Drafts via the generation client, self-checks the
//! draft, regenerates at most a bounded number of times, and scores
//! its own confidence from the retrieval evidence.

pub mod prompts;
pub mod synthesizer;

pub use synthesizer::{Synthesizer, INSUFFICIENT_CONTEXT_ANSWER};
