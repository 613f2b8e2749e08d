//! Property tests for deterministic temporal resolution.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use recall_core::models::TemporalScope;
use recall_planner::temporal;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Any day across several decades.
    (0i64..25_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn yesterday_is_always_exactly_one_day_back(today in arb_date()) {
        let scope = temporal::resolve("what did I do yesterday?", today).unwrap();
        prop_assert_eq!(scope, TemporalScope::Date { date: today - Duration::days(1) });
    }

    #[test]
    fn last_tuesday_is_a_tuesday_strictly_before_today(today in arb_date()) {
        let scope = temporal::resolve("notes from last tuesday", today).unwrap();
        let TemporalScope::Date { date } = scope else {
            return Err(TestCaseError::fail("expected a single date"));
        };
        prop_assert_eq!(date.weekday(), Weekday::Tue);
        prop_assert!(date < today);
        prop_assert!(today - date <= Duration::days(7));
    }

    #[test]
    fn last_week_range_is_seven_days_ending_before_this_week(today in arb_date()) {
        let scope = temporal::resolve("summary of last week", today).unwrap();
        let TemporalScope::Range { start, end } = scope else {
            return Err(TestCaseError::fail("expected a range"));
        };
        prop_assert_eq!(start.weekday(), Weekday::Mon);
        prop_assert_eq!(end.weekday(), Weekday::Sun);
        prop_assert_eq!(end - start, Duration::days(6));
        prop_assert!(end < today);
    }

    #[test]
    fn resolution_is_deterministic(today in arb_date()) {
        let a = temporal::resolve("the meeting last friday", today);
        let b = temporal::resolve("the meeting last friday", today);
        prop_assert_eq!(a, b);
    }
}
