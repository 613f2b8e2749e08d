/// Failures from the generation collaborator, split so the caller can
/// decide whether to retry.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Retryable: rate limits, transient network faults.
    #[error("transient generation failure: {reason}")]
    Transient { reason: String },

    /// Not retryable: bad request, provider rejected the call outright.
    #[error("generation failed: {reason}")]
    Fatal { reason: String },

    /// The call exceeded its deadline. Treated as transient.
    #[error("generation call timed out after {secs}s")]
    Timeout { secs: u64 },
}

impl GenerationError {
    pub fn transient(reason: impl Into<String>) -> Self {
        GenerationError::Transient {
            reason: reason.into(),
        }
    }

    pub fn fatal(reason: impl Into<String>) -> Self {
        GenerationError::Fatal {
            reason: reason.into(),
        }
    }

    /// Whether the retry policy may issue the call again.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GenerationError::Transient { .. } | GenerationError::Timeout { .. }
        )
    }
}
