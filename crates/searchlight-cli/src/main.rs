use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

/// Offline update-priority scoring over GSC/GA4 exports.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank pages from exported GSC/GA4 rows
    Score(cmd::score::ScoreArgs),
    /// Rolling-window sums over a daily metric series
    Trend(cmd::trend::TrendArgs),
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args),
        Commands::Trend(args) => cmd::trend::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
