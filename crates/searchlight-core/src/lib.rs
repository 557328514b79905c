// Re-export the wire types so they are reachable as searchlight_core::*
pub use searchlight_protocol::dates;
pub use searchlight_protocol::de;
pub use searchlight_protocol::score;
pub use searchlight_protocol::stats;
pub use searchlight_protocol::DateRange;

// Internal Modules
pub mod cache;
pub mod config;
pub mod consts;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod provider;
pub mod rolling;
pub mod scorer;
pub mod service;

pub use self::cache::{CacheStats, TtlCache};
pub use self::error::{ProviderError, SearchlightError, SlResult};
pub use self::normalize::normalize;
pub use self::provider::{DataProvider, ProviderMode, StaticProvider};
pub use self::service::ScoreboardService;
