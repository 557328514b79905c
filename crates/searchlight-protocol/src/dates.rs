use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the default reporting window, in days.
pub const DEFAULT_RANGE_DAYS: u64 = 28;

/// The comparison window always starts this many days before today...
pub const COMPARISON_START_DAYS_AGO: u64 = 56;
/// ...and ends this many days before today, whatever range was requested.
pub const COMPARISON_END_DAYS_AGO: u64 = 28;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// `days` ago up to and including `today`.
    pub fn trailing(today: NaiveDate, days: u64) -> Self {
        Self::new(days_before(today, days), today)
    }

    /// The fixed 56-to-28-days-ago comparison window.
    pub fn fixed_previous(today: NaiveDate) -> Self {
        Self::new(
            days_before(today, COMPARISON_START_DAYS_AGO),
            days_before(today, COMPARISON_END_DAYS_AGO),
        )
    }

    /// Builds a range from optional `start`/`end` query values.
    ///
    /// Each bound falls back independently to the trailing 28-day window. The
    /// result must satisfy `start < end`.
    pub fn from_query(
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, String> {
        let default = Self::trailing(today, DEFAULT_RANGE_DAYS);

        let start_date = match start.filter(|s| !s.is_empty()) {
            Some(s) => parse_date(s)?,
            None => default.start_date,
        };
        let end_date = match end.filter(|s| !s.is_empty()) {
            Some(s) => parse_date(s)?,
            None => default.end_date,
        };

        if start_date >= end_date {
            return Err("Start date must be before end date".to_string());
        }

        Ok(Self::new(start_date, end_date))
    }

    pub fn start_str(&self) -> String {
        self.start_date.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_str(), self.end_str())
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD", s))
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}
