/// Event Store read failures. Always fatal for the query that hit them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("event store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable {
            reason: reason.into(),
        }
    }
}
