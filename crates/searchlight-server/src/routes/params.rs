use crate::error::{AppError, AppResult};
use chrono::Utc;
use searchlight_core::consts::MAX_ROW_LIMIT;
use searchlight_core::DateRange;
use serde::Deserialize;

/// Query string shared by the report endpoints.
///
/// Everything is taken as text so bad values become our own 400s instead of
/// extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ReportQuery {
    pub fn range(&self) -> AppResult<DateRange> {
        DateRange::from_query(
            self.start.as_deref(),
            self.end.as_deref(),
            Utc::now().date_naive(),
        )
        .map_err(|msg| AppError::validation("INVALID_DATE_RANGE", msg))
    }

    /// `default` when absent, otherwise clamped to `1..=MAX_ROW_LIMIT`.
    pub fn limit(&self, default: usize) -> AppResult<usize> {
        let raw = match self.limit.as_deref().map(str::trim) {
            None | Some("") => return Ok(default),
            Some(raw) => raw,
        };

        let parsed: i64 = raw.parse().map_err(|_| {
            AppError::validation("INVALID_LIMIT", format!("Invalid limit '{}'", raw))
        })?;
        Ok(parsed.clamp(1, MAX_ROW_LIMIT as i64) as usize)
    }

    pub fn page(&self) -> AppResult<&str> {
        self.page
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| AppError::validation("MISSING_PAGE_PARAM", "Page parameter is required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn with_limit(limit: Option<&str>) -> ReportQuery {
        ReportQuery {
            limit: limit.map(String::from),
            ..Default::default()
        }
    }

    #[rstest]
    #[case(None, 200)]
    #[case(Some(""), 200)]
    #[case(Some("50"), 50)]
    #[case(Some("0"), 1)]
    #[case(Some("-3"), 1)]
    #[case(Some("999999"), 5000)]
    fn test_limit_defaults_and_clamps(#[case] raw: Option<&str>, #[case] expected: usize) {
        assert_eq!(with_limit(raw).limit(200).unwrap(), expected);
    }

    #[test]
    fn test_non_numeric_limit_is_rejected() {
        let err = with_limit(Some("lots")).limit(200).unwrap_err();
        assert_eq!(err.code(), "INVALID_LIMIT");
    }

    #[test]
    fn test_missing_page_is_rejected() {
        assert_eq!(
            ReportQuery::default().page().unwrap_err().code(),
            "MISSING_PAGE_PARAM"
        );
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let q = ReportQuery {
            start: Some("2024-02-01".into()),
            end: Some("2024-01-01".into()),
            ..Default::default()
        };
        assert_eq!(q.range().unwrap_err().code(), "INVALID_DATE_RANGE");
    }
}
