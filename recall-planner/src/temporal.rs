//! Deterministic resolution of relative date expressions.
//!
//! Calendar arithmetic against the injected current date, never the
//! wall clock. Weeks start on Monday.

use std::sync::OnceLock;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;

use recall_core::models::TemporalScope;

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Resolve any relative or explicit date expressions in `question`
/// against `today`. Returns `None` when no cue is found.
///
/// Multiple distinct resolved dates collapse into a range spanning
/// min..max of them.
pub fn resolve(question: &str, today: NaiveDate) -> Option<TemporalScope> {
    let q = question.to_lowercase();

    // Period expressions describe a whole range directly.
    if q.contains("this week") {
        return Some(TemporalScope::Range {
            start: week_start(today),
            end: today,
        });
    }
    if q.contains("last week") {
        let start = week_start(today) - Duration::days(7);
        return Some(TemporalScope::Range {
            start,
            end: start + Duration::days(6),
        });
    }
    if q.contains("this month") {
        return Some(TemporalScope::Range {
            start: month_start(today),
            end: today,
        });
    }
    if q.contains("last month") {
        let end = month_start(today) - Duration::days(1);
        return Some(TemporalScope::Range {
            start: month_start(end),
            end,
        });
    }

    let mut dates = Vec::new();
    if q.contains("yesterday") {
        dates.push(today - Duration::days(1));
    }
    if q.contains("today") {
        dates.push(today);
    }
    for (name, weekday) in WEEKDAYS {
        if q.contains(&format!("last {name}")) {
            dates.push(last_weekday_before(today, weekday));
        }
    }
    dates.extend(iso_dates(&q));

    dates.sort_unstable();
    dates.dedup();
    match dates.as_slice() {
        [] => None,
        [date] => Some(TemporalScope::Date { date: *date }),
        [first, .., last] => Some(TemporalScope::Range {
            start: *first,
            end: *last,
        }),
    }
}

/// The most recent `target` weekday strictly before `today`.
pub fn last_weekday_before(today: NaiveDate, target: Weekday) -> NaiveDate {
    let gap = (today.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7;
    let gap = if gap == 0 { 7 } else { gap };
    today - Duration::days(i64::from(gap))
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Explicit YYYY-MM-DD mentions, in text order.
fn iso_dates(text: &str) -> Vec<NaiveDate> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap());
    re.find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
