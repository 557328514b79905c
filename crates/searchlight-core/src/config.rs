use crate::consts::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_GSC_ROW_LIMIT, DEFAULT_TOP_N, MAX_CACHE_TTL_SECS,
};
use crate::stats::PageDailyStats;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which GSC metric feeds the rolling trend windows.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMetric {
    #[default]
    Clicks,
    Impressions,
}

impl TrendMetric {
    pub fn value_of(&self, row: &PageDailyStats) -> f64 {
        match self {
            TrendMetric::Clicks => row.clicks as f64,
            TrendMetric::Impressions => row.impressions as f64,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Lifetime of cached provider results and scoreboards
    #[arg(long, env = "CACHE_TTL_SECONDS", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl_seconds: u64,

    /// Maximum number of pages returned by the scoreboard
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Row limit for the GSC top-pages fetches
    #[arg(long, default_value_t = DEFAULT_GSC_ROW_LIMIT)]
    pub gsc_row_limit: usize,

    /// Enables the trend rules using rolling windows of this many days
    #[arg(long)]
    pub trend_window_days: Option<usize>,

    #[arg(long, value_enum, default_value_t = TrendMetric::Clicks)]
    pub trend_metric: TrendMetric,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
            top_n: DEFAULT_TOP_N,
            gsc_row_limit: DEFAULT_GSC_ROW_LIMIT,
            trend_window_days: None,
            trend_metric: TrendMetric::Clicks,
        }
    }
}

impl ScoreboardConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds.min(MAX_CACHE_TTL_SECS))
    }

    /// `None` when trend scoring is off (also for a zero-day window).
    pub fn trend_window(&self) -> Option<usize> {
        self.trend_window_days.filter(|&days| days > 0)
    }
}
