use crate::reports;
use clap::Args;
use searchlight_core::config::ScoreboardConfig;
use searchlight_core::ingest;
use searchlight_core::rolling::page_trends;
use searchlight_core::scorer;
use searchlight_core::SlResult;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// GSC top-pages export (CSV or JSON)
    #[arg(long)]
    pub gsc: Option<PathBuf>,

    /// GA4 pages export (CSV or JSON)
    #[arg(long)]
    pub ga4: Option<PathBuf>,

    /// Per-page daily GSC rows; needs --trend-window-days
    #[arg(long)]
    pub page_daily: Option<PathBuf>,

    /// Print the scoreboard as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub config: ScoreboardConfig,
}

pub fn run(args: ScoreArgs) -> SlResult<()> {
    if args.gsc.is_none() && args.ga4.is_none() {
        return Err(searchlight_core::SearchlightError::Config(
            "Provide at least one of --gsc or --ga4".to_string(),
        ));
    }

    let gsc = match &args.gsc {
        Some(path) => ingest::load_search_stats(path)?,
        None => Vec::new(),
    };
    let ga4 = match &args.ga4 {
        Some(path) => ingest::load_engagement_stats(path)?,
        None => Vec::new(),
    };
    info!("📂 Loaded {} GSC rows, {} GA4 rows", gsc.len(), ga4.len());

    let trends = match (&args.page_daily, args.config.trend_window()) {
        (Some(path), Some(window)) => {
            let rows = ingest::load_page_daily(path)?;
            Some(page_trends(&rows, window, args.config.trend_metric))
        }
        (Some(_), None) => {
            warn!("⚠️  --page-daily ignored without --trend-window-days");
            None
        }
        _ => None,
    };

    let mut scores = scorer::score(&gsc, &ga4, trends.as_ref());
    scores.truncate(args.config.top_n);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        reports::print_scoreboard(&scores);
    }
    Ok(())
}
