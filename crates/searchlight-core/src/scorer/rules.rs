use super::types::PageRecord;

// === GSC thresholds ===
const HIGH_IMPRESSIONS: u64 = 1000;
const NOTABLE_IMPRESSIONS: u64 = 500;
const LOW_CTR: f64 = 0.02;
const WEAK_CTR: f64 = 0.03;
const POOR_POSITION: f64 = 10.0;
const GOOD_POSITION: f64 = 5.0;

// === GA4 thresholds ===
const HIGH_TRAFFIC_SESSIONS: u64 = 100;
const TRAFFIC_SESSIONS: u64 = 50;
const SHORT_SESSION_SECS: f64 = 30.0;

// === Trend thresholds (percent) ===
const DECLINE_PCT: f64 = -20.0;
const STAGNANT_PCT: f64 = 5.0;
const STAGNANT_MIN_VOLUME: f64 = 100.0;

/// A weighted heuristic. `check` returns the reason text when it fires.
pub struct Rule {
    pub name: &'static str,
    pub weight: u32,
    check: fn(&PageRecord) -> Option<String>,
}

impl Rule {
    pub fn evaluate(&self, page: &PageRecord) -> Option<String> {
        (self.check)(page)
    }
}

/// Evaluation order is also the order of the emitted reasons.
pub static RULES: [Rule; 7] = [
    Rule {
        name: "meta_description",
        weight: 30,
        check: high_impressions_low_ctr,
    },
    Rule {
        name: "poor_position",
        weight: 25,
        check: high_impressions_poor_position,
    },
    Rule {
        name: "content_relevance",
        weight: 20,
        check: good_position_low_ctr,
    },
    Rule {
        name: "low_engagement",
        weight: 25,
        check: high_traffic_low_engagement,
    },
    Rule {
        name: "high_traffic",
        weight: 15,
        check: high_traffic,
    },
    Rule {
        name: "declining",
        weight: 35,
        check: declining,
    },
    Rule {
        name: "stagnant",
        weight: 10,
        check: stagnant,
    },
];

fn high_impressions_low_ctr(page: &PageRecord) -> Option<String> {
    let gsc = page.search?;
    let ctr = gsc.ctr?;
    (gsc.impressions > HIGH_IMPRESSIONS && ctr < LOW_CTR)
        .then(|| "High impressions, low CTR → optimize meta description".to_string())
}

fn high_impressions_poor_position(page: &PageRecord) -> Option<String> {
    let gsc = page.search?;
    let position = gsc.position?;
    (gsc.impressions > NOTABLE_IMPRESSIONS && position > POOR_POSITION)
        .then(|| "High impressions, poor position → improve SEO".to_string())
}

fn good_position_low_ctr(page: &PageRecord) -> Option<String> {
    let gsc = page.search?;
    let (position, ctr) = (gsc.position?, gsc.ctr?);
    (position <= GOOD_POSITION && ctr < WEAK_CTR)
        .then(|| "Good position, low CTR → improve content relevance".to_string())
}

fn high_traffic_low_engagement(page: &PageRecord) -> Option<String> {
    let ga4 = page.engagement?;
    (ga4.sessions > HIGH_TRAFFIC_SESSIONS && ga4.average_session_duration < SHORT_SESSION_SECS)
        .then(|| "High traffic, low engagement → improve content quality".to_string())
}

fn high_traffic(page: &PageRecord) -> Option<String> {
    let ga4 = page.engagement?;
    (ga4.sessions > TRAFFIC_SESSIONS)
        .then(|| "High traffic page → monitor bounce rate".to_string())
}

fn declining(page: &PageRecord) -> Option<String> {
    let pct = page.trend?.percent_change();
    (pct < DECLINE_PCT).then(|| format!("Declining performance: {:.1}% decrease", pct))
}

fn stagnant(page: &PageRecord) -> Option<String> {
    let trend = page.trend?;
    (trend.percent_change().abs() < STAGNANT_PCT && trend.current > STAGNANT_MIN_VOLUME)
        .then(|| "Stagnant performance → needs optimization".to_string())
}
