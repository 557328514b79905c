#![allow(dead_code)]

use async_trait::async_trait;
use searchlight_core::error::{ProviderError, ProviderResult};
use searchlight_core::stats::{
    DailySearchStats, PageDailyStats, PageEngagementStats, PageSearchStats, QueryStats,
    SiteMetrics,
};
use searchlight_core::{DataProvider, DateRange, ProviderMode, StaticProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Builder for GSC rows to keep tests short
pub struct SearchRow {
    row: PageSearchStats,
}

impl SearchRow {
    pub fn new(page: &str) -> Self {
        Self {
            row: PageSearchStats {
                page: page.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn impressions(mut self, impressions: u64) -> Self {
        self.row.impressions = impressions;
        self
    }

    pub fn clicks(mut self, clicks: u64) -> Self {
        self.row.clicks = clicks;
        self
    }

    pub fn ctr(mut self, ctr: f64) -> Self {
        self.row.ctr = Some(ctr);
        self
    }

    pub fn position(mut self, position: f64) -> Self {
        self.row.position = Some(position);
        self
    }

    pub fn build(self) -> PageSearchStats {
        self.row
    }
}

/// Builder for GA4 rows
pub struct EngagementRow {
    row: PageEngagementStats,
}

impl EngagementRow {
    pub fn new(page_path: &str) -> Self {
        Self {
            row: PageEngagementStats {
                page_path: page_path.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn sessions(mut self, sessions: u64) -> Self {
        self.row.sessions = sessions;
        self.row.engaged_sessions = self.row.engaged_sessions.min(sessions);
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.row.average_session_duration = secs;
        self
    }

    pub fn build(self) -> PageEngagementStats {
        self.row
    }
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(
        searchlight_core::dates::parse_date(start).unwrap(),
        searchlight_core::dates::parse_date(end).unwrap(),
    )
}

/// Wraps a [`StaticProvider`], counting calls and optionally failing GA4 fetches.
pub struct RecordingProvider {
    inner: StaticProvider,
    pub top_pages_calls: AtomicUsize,
    pub pages_calls: AtomicUsize,
    pub page_daily_calls: AtomicUsize,
    pub ranges: Mutex<Vec<DateRange>>,
    fail_pages: bool,
}

impl RecordingProvider {
    pub fn new(inner: StaticProvider) -> Self {
        Self {
            inner,
            top_pages_calls: AtomicUsize::new(0),
            pages_calls: AtomicUsize::new(0),
            page_daily_calls: AtomicUsize::new(0),
            ranges: Mutex::new(Vec::new()),
            fail_pages: false,
        }
    }

    pub fn failing_pages(mut self) -> Self {
        self.fail_pages = true;
        self
    }

    pub fn total_calls(&self) -> usize {
        self.top_pages_calls.load(Ordering::SeqCst)
            + self.pages_calls.load(Ordering::SeqCst)
            + self.page_daily_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataProvider for RecordingProvider {
    fn mode(&self) -> ProviderMode {
        ProviderMode::Mock
    }

    async fn top_pages(
        &self,
        range: &DateRange,
        limit: usize,
    ) -> ProviderResult<Vec<PageSearchStats>> {
        self.top_pages_calls.fetch_add(1, Ordering::SeqCst);
        self.ranges.lock().unwrap().push(*range);
        self.inner.top_pages(range, limit).await
    }

    async fn queries_for_page(
        &self,
        range: &DateRange,
        page: &str,
        limit: usize,
    ) -> ProviderResult<Vec<QueryStats>> {
        self.inner.queries_for_page(range, page, limit).await
    }

    async fn daily_search(&self, range: &DateRange) -> ProviderResult<Vec<DailySearchStats>> {
        self.inner.daily_search(range).await
    }

    async fn page_daily(&self, range: &DateRange) -> ProviderResult<Vec<PageDailyStats>> {
        self.page_daily_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.page_daily(range).await
    }

    async fn pages_aggregate(
        &self,
        range: &DateRange,
    ) -> ProviderResult<Vec<PageEngagementStats>> {
        self.pages_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_pages {
            return Err(ProviderError::Status {
                status: 403,
                body: "quota exceeded".to_string(),
            });
        }
        self.inner.pages_aggregate(range).await
    }

    async fn site_metrics(&self, range: &DateRange) -> ProviderResult<SiteMetrics> {
        self.inner.site_metrics(range).await
    }
}
