use crate::score::{ScoreMetrics, TrendWindow};
use crate::stats::{PageEngagementStats, PageSearchStats};
use indexmap::IndexMap;

/// Rolling-window trends per normalized page key.
///
/// The scorer compares `current[key].current` against `previous[key].previous`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendInput {
    pub current: IndexMap<String, TrendWindow>,
    pub previous: IndexMap<String, TrendWindow>,
}

impl TrendInput {
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.previous.is_empty()
    }

    pub fn pair_for(&self, key: &str) -> Option<TrendPair> {
        Some(TrendPair {
            current: self.current.get(key)?.current,
            previous: self.previous.get(key)?.previous,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPair {
    pub current: f64,
    pub previous: f64,
}

impl TrendPair {
    pub fn percent_change(&self) -> f64 {
        percent_change(self.current, self.previous)
    }
}

/// `+100` for growth from zero, `0` when both sides are zero.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Everything known about one page after the join.
#[derive(Debug, Clone, Copy)]
pub struct PageRecord<'a> {
    pub search: Option<&'a PageSearchStats>,
    pub engagement: Option<&'a PageEngagementStats>,
    pub trend: Option<TrendPair>,
}

impl PageRecord<'_> {
    pub fn metrics(&self) -> ScoreMetrics {
        match self.trend {
            Some(t) => ScoreMetrics {
                current: t.current,
                previous: t.previous,
                delta: t.current - t.previous,
            },
            None => {
                let current = self.search.map_or(0.0, |s| s.impressions as f64);
                ScoreMetrics {
                    current,
                    previous: 0.0,
                    delta: current,
                }
            }
        }
    }
}
