use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{SourceId, UserId};

/// Per-request scope threaded explicitly into every pipeline call.
///
/// Nothing in the pipeline reads the current user or date from ambient
/// state; this value is the only carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryContext {
    pub user_id: UserId,
    /// The date "today" resolves against, injected by the caller.
    pub current_date: NaiveDate,
    /// When set, retrieval restricts candidates to this source.
    pub focus_source: Option<SourceId>,
}

impl QueryContext {
    pub fn new(user_id: UserId, current_date: NaiveDate) -> Self {
        Self {
            user_id,
            current_date,
            focus_source: None,
        }
    }

    pub fn with_focus_source(mut self, source: SourceId) -> Self {
        self.focus_source = Some(source);
        self
    }
}
