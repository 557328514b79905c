//! Live Search Console and Analytics Data API provider.
//!
//! Both APIs are plain JSON-over-POST. Request bodies and the typed ingestion
//! of their responses live in [`gsc`] and [`ga4`]; this module owns the HTTP
//! client, auth header and error mapping.

pub mod ga4;
pub mod gsc;

use crate::config::GoogleSettings;
use async_trait::async_trait;
use reqwest::Client;
use searchlight_core::error::{ProviderError, ProviderResult};
use searchlight_core::stats::{
    DailySearchStats, PageDailyStats, PageEngagementStats, PageSearchStats, QueryStats,
    SiteMetrics,
};
use searchlight_core::{DataProvider, DateRange, ProviderMode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::form_urlencoded;

/// Row limit for the per-page daily fetch feeding the trend windows.
const PAGE_DAILY_ROW_LIMIT: usize = 25_000;

pub struct GoogleProvider {
    client: Client,
    settings: GoogleSettings,
}

impl GoogleProvider {
    pub fn new(settings: GoogleSettings) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        Ok(Self { client, settings })
    }

    fn gsc_url(&self) -> String {
        let site: String =
            form_urlencoded::byte_serialize(self.settings.site_url.as_bytes()).collect();
        format!(
            "{}/sites/{}/searchAnalytics/query",
            self.settings.gsc_base_url, site
        )
    }

    fn ga4_url(&self) -> String {
        format!(
            "{}/properties/{}:runReport",
            self.settings.ga4_base_url, self.settings.property_id
        )
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> ProviderResult<R> {
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.settings.access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn search_analytics(
        &self,
        request: &gsc::SearchAnalyticsRequest,
    ) -> ProviderResult<Vec<gsc::GscRow>> {
        let resp: gsc::SearchAnalyticsResponse = self.post(&self.gsc_url(), request).await?;
        debug!("GSC {:?}: {} rows", request.dimensions, resp.rows.len());
        Ok(resp.rows)
    }

    async fn run_report(&self, request: &ga4::RunReportRequest) -> ProviderResult<ga4::Report> {
        let resp: ga4::RunReportResponse = self.post(&self.ga4_url(), request).await?;
        let report = ga4::Report::from(resp);
        debug!("GA4 report: {} rows", report.len());
        Ok(report)
    }
}

#[async_trait]
impl DataProvider for GoogleProvider {
    fn mode(&self) -> ProviderMode {
        ProviderMode::Google
    }

    async fn top_pages(
        &self,
        range: &DateRange,
        limit: usize,
    ) -> ProviderResult<Vec<PageSearchStats>> {
        let rows = self
            .search_analytics(&gsc::SearchAnalyticsRequest::top_pages(range, limit))
            .await?;
        Ok(rows.iter().map(gsc::GscRow::page_stats).collect())
    }

    async fn queries_for_page(
        &self,
        range: &DateRange,
        page: &str,
        limit: usize,
    ) -> ProviderResult<Vec<QueryStats>> {
        let rows = self
            .search_analytics(&gsc::SearchAnalyticsRequest::queries_for_page(
                range, page, limit,
            ))
            .await?;
        Ok(rows.iter().map(gsc::GscRow::query_stats).collect())
    }

    async fn daily_search(&self, range: &DateRange) -> ProviderResult<Vec<DailySearchStats>> {
        let rows = self
            .search_analytics(&gsc::SearchAnalyticsRequest::daily(range))
            .await?;
        Ok(rows.iter().map(gsc::GscRow::daily_stats).collect())
    }

    async fn page_daily(&self, range: &DateRange) -> ProviderResult<Vec<PageDailyStats>> {
        let rows = self
            .search_analytics(&gsc::SearchAnalyticsRequest::page_daily(
                range,
                PAGE_DAILY_ROW_LIMIT,
            ))
            .await?;
        Ok(rows.iter().map(gsc::GscRow::page_daily_stats).collect())
    }

    async fn pages_aggregate(
        &self,
        range: &DateRange,
    ) -> ProviderResult<Vec<PageEngagementStats>> {
        let report = self
            .run_report(&ga4::RunReportRequest::pages(range))
            .await?;
        Ok(report.page_stats())
    }

    async fn site_metrics(&self, range: &DateRange) -> ProviderResult<SiteMetrics> {
        let report = self
            .run_report(&ga4::RunReportRequest::site_totals(range))
            .await?;
        Ok(report.site_metrics())
    }
}
