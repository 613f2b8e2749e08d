use serde::{Deserialize, Serialize};

use super::defaults;

/// Transport policy for calls to the generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Deadline (seconds) per call attempt.
    pub request_timeout_secs: u64,
    /// Retries after a transient failure or timeout. Distinct from the
    /// Synthesizer's domain-level regeneration bound.
    pub max_transient_retries: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_transient_retries: defaults::DEFAULT_MAX_TRANSIENT_RETRIES,
        }
    }
}
