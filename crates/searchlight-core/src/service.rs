use crate::cache::TtlCache;
use crate::config::ScoreboardConfig;
use crate::error::{ProviderResult, SlResult};
use crate::normalize::normalize;
use crate::provider::DataProvider;
use crate::rolling::page_trends;
use crate::score::PriorityScore;
use crate::scorer::{self, TrendInput};
use crate::stats::{PageDailyStats, PageEngagementStats, PageSearchStats};
use crate::DateRange;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

/// Fetch, score and cache the update-priority scoreboard.
#[derive(TypedBuilder, Clone)]
pub struct ScoreboardService {
    provider: Arc<dyn DataProvider>,
    cache: Arc<TtlCache>,
    #[builder(default)]
    config: ScoreboardConfig,
}

impl ScoreboardService {
    pub fn new(
        provider: Arc<dyn DataProvider>,
        cache: Arc<TtlCache>,
        config: ScoreboardConfig,
    ) -> Self {
        Self {
            provider,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    /// `scoreboard:{start}:{end}`, extended with the comparison bounds when one
    /// is given explicitly.
    pub fn cache_key(range: &DateRange, comparison: Option<&DateRange>) -> String {
        let key = format!("scoreboard:{}:{}", range.start_str(), range.end_str());
        match comparison {
            Some(previous) => format!("{}:{}:{}", key, previous.start_str(), previous.end_str()),
            None => key,
        }
    }

    /// Top pages needing attention for `range`, highest priority first.
    ///
    /// `comparison` defaults to the fixed 56-to-28-days-ago window. A cached
    /// result for the same range and comparison skips all fetching. Any failed fetch fails the
    /// whole call and nothing is cached.
    pub async fn get_scoreboard(
        &self,
        range: DateRange,
        comparison: Option<DateRange>,
    ) -> SlResult<Arc<Vec<PriorityScore>>> {
        let key = Self::cache_key(&range, comparison.as_ref());
        self.cache
            .get_or_insert_with(&key, self.config.cache_ttl(), || {
                self.compute(range, comparison)
            })
            .await
    }

    async fn compute(
        &self,
        range: DateRange,
        comparison: Option<DateRange>,
    ) -> SlResult<Vec<PriorityScore>> {
        let previous =
            comparison.unwrap_or_else(|| DateRange::fixed_previous(Utc::now().date_naive()));
        let limit = self.config.gsc_row_limit;
        let provider = self.provider.as_ref();

        let (gsc_current, ga4_current, gsc_previous, ga4_previous, page_daily) = tokio::try_join!(
            provider.top_pages(&range, limit),
            provider.pages_aggregate(&range),
            provider.top_pages(&previous, limit),
            provider.pages_aggregate(&previous),
            self.fetch_page_daily(&range, &previous),
        )?;

        let gsc_current = normalize_search(gsc_current);
        let ga4_current = normalize_engagement(ga4_current);
        let gsc_previous = normalize_search(gsc_previous);
        let ga4_previous = normalize_engagement(ga4_previous);

        let trends = match (page_daily, self.config.trend_window()) {
            (Some(rows), Some(window)) => {
                Some(page_trends(&rows, window, self.config.trend_metric))
            }
            _ => None,
        };

        let mut scores = scorer::score(&gsc_current, &ga4_current, trends.as_ref());
        apply_period_baseline(&mut scores, &gsc_previous, trends.as_ref());
        scores.truncate(self.config.top_n);

        info!(
            "📊 Scoreboard {}: {} GSC / {} GA4 pages (previous {}: {} / {}) -> {} flagged",
            range,
            gsc_current.len(),
            ga4_current.len(),
            previous,
            gsc_previous.len(),
            ga4_previous.len(),
            scores.len()
        );

        Ok(scores)
    }

    /// Per-page daily rows spanning both periods, only when trends are enabled.
    async fn fetch_page_daily(
        &self,
        range: &DateRange,
        previous: &DateRange,
    ) -> ProviderResult<Option<Vec<PageDailyStats>>> {
        if self.config.trend_window().is_none() {
            return Ok(None);
        }

        let span = DateRange::new(previous.start_date.min(range.start_date), range.end_date);
        let rows = self.provider.page_daily(&span).await?;
        debug!("Fetched {} page/day rows for {}", rows.len(), span);
        Ok(Some(rows))
    }
}

fn normalize_search(rows: Vec<PageSearchStats>) -> Vec<PageSearchStats> {
    rows.into_iter()
        .map(|row| PageSearchStats {
            page: normalize(&row.page),
            ..row
        })
        .collect()
}

fn normalize_engagement(rows: Vec<PageEngagementStats>) -> Vec<PageEngagementStats> {
    rows.into_iter()
        .map(|row| PageEngagementStats {
            page_path: normalize(&row.page_path),
            ..row
        })
        .collect()
}

/// Fills `previous`/`delta` from the comparison period's impressions for pages
/// whose metrics did not come from trend windows.
fn apply_period_baseline(
    scores: &mut [PriorityScore],
    gsc_previous: &[PageSearchStats],
    trends: Option<&TrendInput>,
) {
    let baseline: HashMap<&str, u64> = gsc_previous
        .iter()
        .map(|row| (row.page.as_str(), row.impressions))
        .collect();

    for entry in scores.iter_mut() {
        let has_trend = trends.is_some_and(|t| t.pair_for(&entry.page_path).is_some());
        if has_trend {
            continue;
        }
        if let Some(&impressions) = baseline.get(entry.page_path.as_str()) {
            entry.metrics.previous = impressions as f64;
            entry.metrics.delta = entry.metrics.current - entry.metrics.previous;
        }
    }
}
