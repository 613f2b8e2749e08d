//! Default tunables. All are design choices exposed as configuration,
//! not rediscovered constants.

/// Lookback window (days) when a question has no temporal cue.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// Chunks each retrieval agent returns.
pub const DEFAULT_TOP_K: usize = 10;

/// Document retrieval over-fetches `top_k * multiplier` candidates
/// before the entity boost re-ranks them.
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 2;

/// Score boost per entity shared with the timeline results.
pub const DEFAULT_ENTITY_BOOST_WEIGHT: f64 = 0.1;

/// A planner range wider than this (days) gets narrowed.
pub const DEFAULT_MAX_RANGE_DAYS: i64 = 30;

/// Width (days) a too-wide range is narrowed to, ending at its end date.
pub const DEFAULT_NARROW_TO_DAYS: i64 = 7;

/// Minimum cosine similarity for an aligned pair.
pub const DEFAULT_ALIGNMENT_THRESHOLD: f64 = 0.6;

/// Aligned pairs kept after sorting.
pub const DEFAULT_MAX_ALIGNED_PAIRS: usize = 5;

/// Chunk snippet length (chars) in the merged context.
pub const DEFAULT_SNIPPET_CHARS: usize = 300;

/// Chunks per merged-context section.
pub const DEFAULT_MAX_CONTEXT_CHUNKS: usize = 5;

/// Connections listed in the merged context.
pub const DEFAULT_MAX_CONTEXT_PAIRS: usize = 3;

/// Synthesizer regenerations after a failed self-check.
pub const DEFAULT_MAX_REGENERATIONS: u32 = 1;

/// Confidence multiplier applied when a regeneration was needed.
pub const DEFAULT_REGENERATION_PENALTY: f64 = 0.8;

/// Deadline (seconds) for each generative call attempt.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Transport-level retries after a transient generation failure.
pub const DEFAULT_MAX_TRANSIENT_RETRIES: u32 = 2;
