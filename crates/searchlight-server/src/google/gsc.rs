use searchlight_core::stats::{DailySearchStats, PageDailyStats, PageSearchStats, QueryStats};
use searchlight_core::DateRange;
use serde::{Deserialize, Serialize};

const DAILY_ROW_LIMIT: usize = 1000;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsRequest {
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub search_type: &'static str,
    pub dimensions: Vec<&'static str>,
    pub row_limit: usize,
    pub data_state: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_filter_groups: Vec<FilterGroup>,
    pub order_by: Vec<OrderBy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterGroup {
    pub filters: Vec<DimensionFilter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionFilter {
    pub dimension: &'static str,
    pub operator: &'static str,
    pub expression: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderBy {
    pub field: &'static str,
    pub descending: bool,
}

impl SearchAnalyticsRequest {
    fn base(range: &DateRange, dimensions: Vec<&'static str>, row_limit: usize) -> Self {
        Self {
            start_date: range.start_str(),
            end_date: range.end_str(),
            search_type: "web",
            dimensions,
            row_limit,
            data_state: "final",
            dimension_filter_groups: Vec::new(),
            order_by: vec![OrderBy {
                field: "impressions",
                descending: true,
            }],
        }
    }

    pub fn top_pages(range: &DateRange, limit: usize) -> Self {
        Self::base(range, vec!["page"], limit)
    }

    pub fn queries_for_page(range: &DateRange, page: &str, limit: usize) -> Self {
        let mut req = Self::base(range, vec!["query"], limit);
        req.dimension_filter_groups = vec![FilterGroup {
            filters: vec![DimensionFilter {
                dimension: "page",
                operator: "equals",
                expression: page.to_string(),
            }],
        }];
        req
    }

    pub fn daily(range: &DateRange) -> Self {
        let mut req = Self::base(range, vec!["date"], DAILY_ROW_LIMIT);
        req.order_by = vec![OrderBy {
            field: "date",
            descending: false,
        }];
        req
    }

    pub fn page_daily(range: &DateRange, limit: usize) -> Self {
        let mut req = Self::base(range, vec!["date", "page"], limit);
        req.order_by = vec![OrderBy {
            field: "date",
            descending: false,
        }];
        req
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchAnalyticsResponse {
    /// Absent entirely when the range has no data.
    #[serde(default)]
    pub rows: Vec<GscRow>,
}

/// One row of a searchAnalytics.query response. `keys` follow the requested
/// dimension order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GscRow {
    pub keys: Vec<String>,
    pub clicks: f64,
    pub impressions: f64,
    pub ctr: f64,
    pub position: f64,
}

impl GscRow {
    fn key(&self, i: usize) -> String {
        self.keys.get(i).cloned().unwrap_or_default()
    }

    fn clicks(&self) -> u64 {
        self.clicks.max(0.0).round() as u64
    }

    fn impressions(&self) -> u64 {
        self.impressions.max(0.0).round() as u64
    }

    pub fn page_stats(&self) -> PageSearchStats {
        PageSearchStats {
            page: self.key(0),
            clicks: self.clicks(),
            impressions: self.impressions(),
            ctr: Some(self.ctr),
            position: Some(self.position),
        }
    }

    pub fn query_stats(&self) -> QueryStats {
        QueryStats {
            query: self.key(0),
            clicks: self.clicks(),
            impressions: self.impressions(),
            ctr: self.ctr,
            position: self.position,
        }
    }

    pub fn daily_stats(&self) -> DailySearchStats {
        DailySearchStats {
            date: self.key(0),
            clicks: self.clicks(),
            impressions: self.impressions(),
            ctr: self.ctr,
            position: self.position,
        }
    }

    pub fn page_daily_stats(&self) -> PageDailyStats {
        PageDailyStats {
            date: self.key(0),
            page: self.key(1),
            clicks: self.clicks(),
            impressions: self.impressions(),
        }
    }
}
