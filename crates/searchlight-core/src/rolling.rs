use crate::config::TrendMetric;
use crate::de::blank_as_zero;
use crate::normalize::normalize;
use crate::score::TrendWindow;
use crate::scorer::TrendInput;
use crate::stats::PageDailyStats;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One metric value for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyValue {
    pub date: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub value: f64,
}

impl DailyValue {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Current/previous window sums for every row that has a full window behind it.
///
/// Rows are sorted by date first. For each index `i >= window_days`, `current`
/// sums the `window_days` rows ending at `i` and `previous` sums the
/// `window_days` rows before that, clamped at the start of the series.
/// Returns nothing when `window_days` is zero or the series is too short.
pub fn rolling_sums(rows: &[DailyValue], window_days: usize) -> Vec<TrendWindow> {
    if window_days == 0 || rows.len() <= window_days {
        return Vec::new();
    }

    let mut sorted: Vec<&DailyValue> = rows.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    // prefix[n] = sum of the first n values
    let mut prefix = Vec::with_capacity(sorted.len() + 1);
    let mut running = 0.0;
    prefix.push(running);
    for row in &sorted {
        running += row.value;
        prefix.push(running);
    }

    (window_days..sorted.len())
        .map(|i| {
            let end = i + 1;
            let current_start = end - window_days;
            let previous_start = current_start.saturating_sub(window_days);

            TrendWindow {
                date: sorted[i].date.clone(),
                current: prefix[end] - prefix[current_start],
                previous: prefix[current_start] - prefix[previous_start],
            }
        })
        .collect()
}

/// Latest rolling window per page, keyed by normalized path.
///
/// Rows whose pages normalize to the same key are summed per date. A page
/// needs `2 * window_days` days of history so the previous window is never a
/// partial sum; shorter pages are left out. The same window is recorded as
/// both the current and previous trend, so the scorer compares the latest
/// `window_days` against the ones before them.
pub fn page_trends(
    rows: &[PageDailyStats],
    window_days: usize,
    metric: TrendMetric,
) -> TrendInput {
    let mut series: IndexMap<String, BTreeMap<&str, f64>> = IndexMap::new();
    for row in rows {
        *series
            .entry(normalize(&row.page))
            .or_default()
            .entry(row.date.as_str())
            .or_default() += metric.value_of(row);
    }

    let mut trends = TrendInput::default();
    for (key, days) in series {
        if days.len() < window_days.saturating_mul(2) {
            continue;
        }

        let values: Vec<DailyValue> = days
            .into_iter()
            .map(|(date, value)| DailyValue::new(date, value))
            .collect();

        if let Some(latest) = rolling_sums(&values, window_days).pop() {
            trends.previous.insert(key.clone(), latest.clone());
            trends.current.insert(key, latest);
        }
    }
    trends
}
