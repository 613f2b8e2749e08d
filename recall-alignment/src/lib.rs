//! # recall-alignment
//!
//! Connects the two retrieval branches: pairwise similarity between
//! timeline and document chunks, a deterministic summary of what was
//! retrieved, and the merged provenance-labeled context handed to the
//! synthesizer.

pub mod engine;

pub use engine::AlignmentEngine;
