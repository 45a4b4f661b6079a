//! # Time Utilities
//!
//! Calendar date ranges used by the dashboard revenue chart.
//!
//! Ranges are inclusive on both ends and rendered as ISO-8601 UTC instants:
//! the start at `00:00:00.000Z`, the end at `23:59:59.999Z`.

use chrono::{NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Inclusive calendar date range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from two dates in any order.
    pub fn new(first: NaiveDate, second: NaiveDate) -> Self {
        if second < first {
            Self { start: second, end: first }
        } else {
            Self { start: first, end: second }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start of the first day as an RFC3339 UTC instant.
    pub fn start_param(&self) -> String {
        format_instant(self.start, NaiveTime::MIN)
    }

    /// Last millisecond of the final day as an RFC3339 UTC instant.
    pub fn end_param(&self) -> String {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        format_instant(self.end, end_of_day)
    }
}

/// Today's date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::FailToDateParse(value.to_string()))
}

fn format_instant(date: NaiveDate, time: NaiveTime) -> String {
    Utc.from_utc_datetime(&date.and_time(time))
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::FailToDateParse(value) => write!(fmt, "'{value}' is not a YYYY-MM-DD date"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_ordered() {
        let range = DateRange::new(date(2025, 3, 10), date(2025, 3, 1));
        assert_eq!(range.start(), date(2025, 3, 1));
        assert_eq!(range.end(), date(2025, 3, 10));
    }

    #[test]
    fn test_params_cover_whole_days() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 7));
        assert_eq!(range.start_param(), "2025-01-01T00:00:00.000Z");
        assert_eq!(range.end_param(), "2025-01-07T23:59:59.999Z");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-02-28").unwrap(), date(2025, 2, 28));
        assert!(parse_date("28/02/2025").is_err());
    }
}
