//! Transaction date extraction: "ngày 2.6", "2/6", "hôm qua", "hôm kia", "tuần trước".

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;

static RE_DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:ngày\s*)?([0-9]{1,2})[./]([0-9]{1,2})").unwrap()
});

/// Relative phrases and how many days they go back, in evaluation order.
const RELATIVE_PHRASES: &[(&str, u64)] = &[
    ("hôm qua", 1),
    ("hôm kia", 2),
    ("tuần trước", 7),
];

/// Resolve the date a message talks about.
///
/// Starts from `today` and applies each rule in order; every rule that
/// matches overwrites the previous result, so the last match wins:
/// day/month pattern, then "hôm qua", "hôm kia", "tuần trước".
/// A day/month pair that is not a real calendar date is ignored.
pub fn extract_date(text: &str, today: NaiveDate) -> NaiveDate {
    let text = text.to_lowercase();
    let mut date = today;

    if let Some(caps) = RE_DAY_MONTH.captures(&text) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        if day <= 31 && month <= 12 {
            if let Some(d) = NaiveDate::from_ymd_opt(today.year(), month, day) {
                date = d;
            }
        }
    }

    for (phrase, days_back) in RELATIVE_PHRASES {
        if text.contains(phrase) {
            date = today.checked_sub_days(Days::new(*days_back)).unwrap_or(today);
        }
    }

    date
}
