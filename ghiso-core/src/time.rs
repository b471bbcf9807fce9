//! Time utilities: resolving "today" in the household's timezone.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TIMEZONE: &str = "Asia/Ho_Chi_Minh";

/// Parse an IANA timezone name like "Asia/Ho_Chi_Minh".
pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// The instant `now` expressed in `tz`.
pub fn now_in(tz: Tz, now: DateTime<Utc>) -> DateTime<Tz> {
    tz.from_utc_datetime(&now.naive_utc())
}

/// YYYY-MM key the ledger groups transactions by.
pub fn month_year(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_in_saigon_crosses_midnight() {
        // 18:30 UTC is 01:30 the next day in UTC+7
        let utc = Utc.with_ymd_and_hms(2024, 6, 20, 18, 30, 0).unwrap();
        let tz = parse_timezone(DEFAULT_TIMEZONE).unwrap();
        let local = now_in(tz, utc);
        assert_eq!(local.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
    }

    #[test]
    fn test_invalid_timezone() {
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_month_year() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(month_year(d), "2024-06");
    }
}
