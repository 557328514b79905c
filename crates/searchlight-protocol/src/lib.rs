// Wire types shared by the core engine, the HTTP server and the CLI.
pub mod dates;
pub mod de;
pub mod score;
pub mod stats;

pub use self::dates::DateRange;
pub use self::score::{PriorityScore, ScoreMetrics, TrendWindow};
pub use self::stats::{
    DailySearchStats, PageDailyStats, PageEngagementStats, PageSearchStats, QueryStats,
    SiteMetrics,
};
