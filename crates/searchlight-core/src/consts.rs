/// Seconds a cached provider result or scoreboard stays valid.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 900;

/// Maximum number of pages the scoreboard reports.
pub const DEFAULT_TOP_N: usize = 100;

/// Row limit used for the GSC top-pages fetches behind the scoreboard.
pub const DEFAULT_GSC_ROW_LIMIT: usize = 1000;

/// Default `limit` for `/api/gsc/top`.
pub const DEFAULT_TOP_PAGES_LIMIT: usize = 200;

/// Default `limit` for `/api/gsc/queries`.
pub const DEFAULT_QUERIES_LIMIT: usize = 50;

/// Upper bound applied to any caller-supplied `limit`.
pub const MAX_ROW_LIMIT: usize = 5000;

/// Cache entries never live longer than this, whatever the configured TTL.
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;
