use serde::{Deserialize, Serialize};

/// Sums of a metric over two adjacent windows ending at `date`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendWindow {
    pub date: String,
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreMetrics {
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
}

/// A page that needs attention, with the rules that flagged it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityScore {
    pub page_path: String,
    pub priority: u32,
    pub reasons: Vec<String>,
    pub metrics: ScoreMetrics,
}
