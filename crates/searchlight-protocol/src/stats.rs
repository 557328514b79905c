use crate::de::blank_as_zero;
use serde::{Deserialize, Serialize};

/// One Search Console row for the `page` dimension.
///
/// `ctr` and `position` stay optional: a row without them never triggers a
/// rule that reads them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSearchStats {
    pub page: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub clicks: u64,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub impressions: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

/// One GA4 row for the `pagePath` dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEngagementStats {
    pub page_path: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub sessions: u64,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub engaged_sessions: u64,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub average_session_duration: f64,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub conversions: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStats {
    pub query: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub position: f64,
}

/// Site-wide Search Console totals for a single day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySearchStats {
    pub date: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub position: f64,
}

/// Search Console totals for one page on one day (`page` x `date` dimensions).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDailyStats {
    pub page: String,
    pub date: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub clicks: u64,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub impressions: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetrics {
    pub total_sessions: u64,
    pub total_engaged_sessions: u64,
    pub average_session_duration: f64,
    pub total_conversions: u64,
    pub bounce_rate: f64,
}
