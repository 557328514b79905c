use searchlight_core::stats::{PageEngagementStats, SiteMetrics};
use searchlight_core::DateRange;
use serde::{Deserialize, Serialize};

const PAGE_METRICS: [&str; 4] = [
    "sessions",
    "engagedSessions",
    "averageSessionDuration",
    "conversions",
];

const PAGES_REPORT_LIMIT: &str = "100000";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    pub date_ranges: Vec<ReportRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Named>,
    pub metrics: Vec<Named>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

fn named(names: &[&str]) -> Vec<Named> {
    names
        .iter()
        .map(|n| Named {
            name: n.to_string(),
        })
        .collect()
}

impl RunReportRequest {
    fn over(range: &DateRange) -> Vec<ReportRange> {
        vec![ReportRange {
            start_date: range.start_str(),
            end_date: range.end_str(),
        }]
    }

    pub fn pages(range: &DateRange) -> Self {
        Self {
            date_ranges: Self::over(range),
            dimensions: named(&["pagePath"]),
            metrics: named(&PAGE_METRICS),
            limit: Some(PAGES_REPORT_LIMIT),
        }
    }

    pub fn site_totals(range: &DateRange) -> Self {
        let mut metrics = named(&PAGE_METRICS);
        metrics.extend(named(&["bounceRate"]));
        Self {
            date_ranges: Self::over(range),
            dimensions: Vec::new(),
            metrics,
            limit: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunReportResponse {
    pub dimension_headers: Vec<Named>,
    pub metric_headers: Vec<Named>,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRow {
    pub dimension_values: Vec<ReportValue>,
    pub metric_values: Vec<ReportValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportValue {
    pub value: String,
}

/// A runReport response with metric values resolved by header name.
///
/// GA4 returns every value as a string, positionally matched to the headers.
/// Missing or unparseable values read as 0.
pub struct Report {
    metric_names: Vec<String>,
    rows: Vec<ReportRow>,
}

impl From<RunReportResponse> for Report {
    fn from(resp: RunReportResponse) -> Self {
        Self {
            metric_names: resp.metric_headers.into_iter().map(|h| h.name).collect(),
            rows: resp.rows,
        }
    }
}

impl Report {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn metric(&self, row: &ReportRow, name: &str) -> f64 {
        self.metric_names
            .iter()
            .position(|n| n == name)
            .and_then(|i| row.metric_values.get(i))
            .and_then(|v| v.value.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    fn count(&self, row: &ReportRow, name: &str) -> u64 {
        self.metric(row, name).max(0.0).round() as u64
    }

    pub fn page_stats(&self) -> Vec<PageEngagementStats> {
        self.rows
            .iter()
            .map(|row| PageEngagementStats {
                page_path: row
                    .dimension_values
                    .first()
                    .map(|v| v.value.clone())
                    .unwrap_or_default(),
                sessions: self.count(row, "sessions"),
                engaged_sessions: self.count(row, "engagedSessions"),
                average_session_duration: self.metric(row, "averageSessionDuration"),
                conversions: self.count(row, "conversions"),
            })
            .collect()
    }

    /// Totals from the single dimensionless row; all zero when GA4 sends none.
    pub fn site_metrics(&self) -> SiteMetrics {
        let Some(row) = self.rows.first() else {
            return SiteMetrics::default();
        };

        SiteMetrics {
            total_sessions: self.count(row, "sessions"),
            total_engaged_sessions: self.count(row, "engagedSessions"),
            average_session_duration: self.metric(row, "averageSessionDuration"),
            total_conversions: self.count(row, "conversions"),
            bounce_rate: self.metric(row, "bounceRate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(value: serde_json::Value) -> Report {
        Report::from(serde_json::from_value::<RunReportResponse>(value).unwrap())
    }

    #[test]
    fn test_metrics_are_matched_by_header_not_position() {
        let r = report(json!({
            "dimensionHeaders": [{"name": "pagePath"}],
            "metricHeaders": [
                {"name": "conversions", "type": "TYPE_INTEGER"},
                {"name": "sessions", "type": "TYPE_INTEGER"}
            ],
            "rows": [{
                "dimensionValues": [{"value": "/pricing"}],
                "metricValues": [{"value": "4"}, {"value": "150"}]
            }]
        }));

        let pages = r.page_stats();
        assert_eq!(pages[0].page_path, "/pricing");
        assert_eq!(pages[0].sessions, 150);
        assert_eq!(pages[0].conversions, 4);
        assert_eq!(pages[0].engaged_sessions, 0);
    }

    #[test]
    fn test_unparseable_values_read_as_zero() {
        let r = report(json!({
            "metricHeaders": [{"name": "averageSessionDuration"}],
            "rows": [{
                "dimensionValues": [{"value": "/a"}],
                "metricValues": [{"value": "n/a"}]
            }]
        }));
        assert_eq!(r.page_stats()[0].average_session_duration, 0.0);
    }

    #[test]
    fn test_empty_report_gives_zero_site_metrics() {
        let r = report(json!({ "kind": "analyticsData#runReport" }));
        assert!(r.is_empty());
        assert_eq!(r.site_metrics(), SiteMetrics::default());
    }

    #[test]
    fn test_site_totals_body_requests_bounce_rate() {
        let range = DateRange::new(
            searchlight_core::dates::parse_date("2024-01-01").unwrap(),
            searchlight_core::dates::parse_date("2024-01-28").unwrap(),
        );
        let body = serde_json::to_value(RunReportRequest::site_totals(&range)).unwrap();
        assert_eq!(body["metrics"][4], json!({"name": "bounceRate"}));
        assert!(body.get("dimensions").is_none());
        assert!(body.get("limit").is_none());
    }
}
