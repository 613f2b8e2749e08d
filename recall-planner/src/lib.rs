//! # recall-planner
//!
//! The Planner agent: turns a raw question into a structured
//! `QueryPlan` (temporal scope, topics, entities, subtasks).
//!
//! Relative date expressions are resolved deterministically against the
//! injected current date; the LLM extraction fills in topics, entities,
//! and any temporal scope the resolver could not see. Extraction
//! failure degrades the plan instead of failing the query.

pub mod planner;
pub mod temporal;

pub use planner::Planner;
