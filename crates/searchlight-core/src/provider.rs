use crate::error::{ProviderResult, SlResult};
use crate::stats::{
    DailySearchStats, PageDailyStats, PageEngagementStats, PageSearchStats, QueryStats,
    SiteMetrics,
};
use crate::DateRange;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use strum::Display;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    /// Live Search Console and Analytics Data APIs.
    Google,
    /// No credentials configured; serves canned (usually empty) data.
    Mock,
}

/// Source of GSC and GA4 rows for a date range.
///
/// Implementations own their transport, auth and timeout policy. Nothing above
/// this trait retries.
#[async_trait]
pub trait DataProvider: Send + Sync {
    fn mode(&self) -> ProviderMode;

    async fn top_pages(
        &self,
        range: &DateRange,
        limit: usize,
    ) -> ProviderResult<Vec<PageSearchStats>>;

    async fn queries_for_page(
        &self,
        range: &DateRange,
        page: &str,
        limit: usize,
    ) -> ProviderResult<Vec<QueryStats>>;

    async fn daily_search(&self, range: &DateRange) -> ProviderResult<Vec<DailySearchStats>>;

    async fn page_daily(&self, range: &DateRange) -> ProviderResult<Vec<PageDailyStats>>;

    async fn pages_aggregate(&self, range: &DateRange)
        -> ProviderResult<Vec<PageEngagementStats>>;

    async fn site_metrics(&self, range: &DateRange) -> ProviderResult<SiteMetrics>;
}

/// Canned datasets, loadable from a JSON fixture file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticFixtures {
    pub top_pages: Vec<PageSearchStats>,
    pub queries: Vec<QueryStats>,
    pub daily: Vec<DailySearchStats>,
    pub page_daily: Vec<PageDailyStats>,
    pub pages: Vec<PageEngagementStats>,
    pub site_metrics: SiteMetrics,
}

/// Provider that answers every range with the same fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    fixtures: StaticFixtures,
}

impl StaticProvider {
    /// Mock mode with no data at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(fixtures: StaticFixtures) -> Self {
        Self { fixtures }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SlResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let fixtures: StaticFixtures = serde_json::from_reader(reader)?;
        info!(
            "📦 Loaded fixtures from {:?}: {} GSC pages, {} GA4 pages",
            path,
            fixtures.top_pages.len(),
            fixtures.pages.len()
        );
        Ok(Self::new(fixtures))
    }

    pub fn with_top_pages(mut self, rows: Vec<PageSearchStats>) -> Self {
        self.fixtures.top_pages = rows;
        self
    }

    pub fn with_pages(mut self, rows: Vec<PageEngagementStats>) -> Self {
        self.fixtures.pages = rows;
        self
    }

    pub fn with_page_daily(mut self, rows: Vec<PageDailyStats>) -> Self {
        self.fixtures.page_daily = rows;
        self
    }
}

#[async_trait]
impl DataProvider for StaticProvider {
    fn mode(&self) -> ProviderMode {
        ProviderMode::Mock
    }

    async fn top_pages(
        &self,
        _range: &DateRange,
        limit: usize,
    ) -> ProviderResult<Vec<PageSearchStats>> {
        let mut rows = self.fixtures.top_pages.clone();
        rows.sort_by(|a, b| b.impressions.cmp(&a.impressions));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn queries_for_page(
        &self,
        _range: &DateRange,
        _page: &str,
        limit: usize,
    ) -> ProviderResult<Vec<QueryStats>> {
        let mut rows = self.fixtures.queries.clone();
        rows.sort_by(|a, b| b.impressions.cmp(&a.impressions));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn daily_search(&self, _range: &DateRange) -> ProviderResult<Vec<DailySearchStats>> {
        Ok(self.fixtures.daily.clone())
    }

    async fn page_daily(&self, _range: &DateRange) -> ProviderResult<Vec<PageDailyStats>> {
        Ok(self.fixtures.page_daily.clone())
    }

    async fn pages_aggregate(
        &self,
        _range: &DateRange,
    ) -> ProviderResult<Vec<PageEngagementStats>> {
        Ok(self.fixtures.pages.clone())
    }

    async fn site_metrics(&self, _range: &DateRange) -> ProviderResult<SiteMetrics> {
        Ok(self.fixtures.site_metrics.clone())
    }
}
