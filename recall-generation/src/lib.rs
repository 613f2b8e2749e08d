//! # recall-generation
//!
//! Transport layer between the agents and the generation collaborator.
//! Wraps any `GenerationProvider` with a per-attempt deadline and a
//! bounded transient-retry policy, and knows how to dig JSON out of
//! LLM replies.
//!
//! The retry bound here is transport-level; the Synthesizer's
//! domain-level regeneration loop is separate and lives in
//! `recall-synthesis`.

pub mod client;
pub mod json;

pub use client::GenerationClient;
