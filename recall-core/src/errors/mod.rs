//! Error taxonomy for the query pipeline.

mod generation_error;
mod query_error;
mod store_error;

pub use generation_error::GenerationError;
pub use query_error::QueryError;
pub use store_error::StoreError;

/// Standard result alias used at every agent boundary.
pub type RecallResult<T> = Result<T, QueryError>;
