use crate::reports;
use clap::Args;
use searchlight_core::ingest;
use searchlight_core::rolling::rolling_sums;
use searchlight_core::SlResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    /// Daily series with `date` and `value` columns (CSV or JSON)
    #[arg(long)]
    pub daily: PathBuf,

    #[arg(short, long, default_value_t = 28)]
    pub window: usize,

    /// Only show the last N windows
    #[arg(long)]
    pub last: Option<usize>,
}

pub fn run(args: TrendArgs) -> SlResult<()> {
    let rows = ingest::load_daily_values(&args.daily)?;
    let windows = rolling_sums(&rows, args.window);

    if windows.is_empty() {
        println!(
            "Not enough history: {} days for a {}-day window.",
            rows.len(),
            args.window
        );
        return Ok(());
    }

    let skip = args
        .last
        .map_or(0, |n| windows.len().saturating_sub(n));
    reports::print_trends(&windows[skip..], args.window);
    Ok(())
}
