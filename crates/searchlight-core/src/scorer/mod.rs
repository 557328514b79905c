pub mod rules;
pub mod types;

pub use self::rules::{Rule, RULES};
pub use self::types::{percent_change, PageRecord, TrendInput, TrendPair};

use crate::normalize::normalize;
use crate::score::PriorityScore;
use crate::stats::{PageEngagementStats, PageSearchStats};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Ranks pages by how urgently they need updating.
///
/// GSC and GA4 rows are joined on their normalized path; duplicate keys keep
/// the last row but the position of the first. Every page in either source is
/// evaluated against [`RULES`]. Trend rules only run when `trends` is given and
/// holds both windows for the page. Pages no rule fired for are dropped. The
/// result is sorted by priority, highest first, ties kept in join order.
pub fn score(
    gsc_rows: &[PageSearchStats],
    ga4_rows: &[PageEngagementStats],
    trends: Option<&TrendInput>,
) -> Vec<PriorityScore> {
    let mut search: IndexMap<String, &PageSearchStats> = IndexMap::new();
    for row in gsc_rows {
        search.insert(normalize(&row.page), row);
    }

    let mut engagement: IndexMap<String, &PageEngagementStats> = IndexMap::new();
    for row in ga4_rows {
        engagement.insert(normalize(&row.page_path), row);
    }

    let pages: IndexSet<&String> = search.keys().chain(engagement.keys()).collect();

    let mut results = Vec::new();
    for key in pages {
        let record = PageRecord {
            search: search.get(key).copied(),
            engagement: engagement.get(key).copied(),
            trend: trends.and_then(|t| t.pair_for(key)),
        };

        if let Some(scored) = evaluate(key, &record) {
            results.push(scored);
        }
    }

    // sort_by is stable, so equal priorities keep join order
    results.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!(
        "Scored {} GSC / {} GA4 pages -> {} flagged",
        search.len(),
        engagement.len(),
        results.len()
    );
    results
}

/// Applies every rule to one page. `None` when nothing fired.
pub fn evaluate(page_path: &str, record: &PageRecord) -> Option<PriorityScore> {
    let mut priority = 0;
    let mut reasons = Vec::new();

    for rule in RULES.iter() {
        if let Some(reason) = rule.evaluate(record) {
            priority += rule.weight;
            reasons.push(reason);
        }
    }

    if priority == 0 {
        return None;
    }

    Some(PriorityScore {
        page_path: page_path.to_string(),
        priority,
        reasons,
        metrics: record.metrics(),
    })
}
