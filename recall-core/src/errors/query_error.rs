use crate::traits::Purpose;

use super::generation_error::GenerationError;
use super::store_error::StoreError;

/// The typed outcomes an agent boundary may surface to the orchestrator.
/// No raw/unstructured failure crosses a stage boundary.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A generative call failed fatally (or exhausted its retries).
    #[error("generation failed during {purpose}: {reason}")]
    Generation { purpose: Purpose, reason: String },
}

impl QueryError {
    pub fn generation(purpose: Purpose, source: GenerationError) -> Self {
        QueryError::Generation {
            purpose,
            reason: source.to_string(),
        }
    }
}
