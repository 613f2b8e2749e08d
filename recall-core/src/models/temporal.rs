use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// The resolved date, date range, or lookback window a question is
/// anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemporalScope {
    /// A single exact date.
    Date { date: NaiveDate },
    /// An inclusive date range.
    Range { start: NaiveDate, end: NaiveDate },
    /// A relative window of `days` ending at the current date.
    Lookback { days: u32 },
    /// No temporal cue detected. Retrieval falls back to the configured
    /// lookback window; this is never an error.
    Unscoped,
}

impl TemporalScope {
    /// Resolve this scope into a concrete date filter against `today`.
    ///
    /// `Unscoped` degrades to `default_lookback_days` ending today.
    pub fn to_filter(&self, today: NaiveDate, default_lookback_days: u32) -> DateFilter {
        match *self {
            TemporalScope::Date { date } => DateFilter::On(date),
            TemporalScope::Range { start, end } => DateFilter::Between { start, end },
            TemporalScope::Lookback { days } => lookback_filter(today, days),
            TemporalScope::Unscoped => lookback_filter(today, default_lookback_days),
        }
    }
}

fn lookback_filter(today: NaiveDate, days: u32) -> DateFilter {
    let start = today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    DateFilter::Between { start, end: today }
}

/// A concrete date predicate the store applies when listing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFilter {
    /// Exactly this date.
    On(NaiveDate),
    /// Inclusive range.
    Between { start: NaiveDate, end: NaiveDate },
    /// No date restriction.
    Any,
}

impl DateFilter {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            DateFilter::On(d) => date == d,
            DateFilter::Between { start, end } => date >= start && date <= end,
            DateFilter::Any => true,
        }
    }
}
