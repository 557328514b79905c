use searchlight_core::config::ScoreboardConfig;
use searchlight_core::{DataProvider, ScoreboardService, TtlCache};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DataProvider>,
    pub cache: Arc<TtlCache>,
    pub scoreboard: ScoreboardService,
    pub site_url_configured: bool,
    pub ga4_property_configured: bool,
    pub started_at: Instant,
}

impl AppState {
    /// One cache shared by the report endpoints and the scoreboard.
    pub fn new(provider: Arc<dyn DataProvider>, config: ScoreboardConfig) -> Self {
        let cache = Arc::new(TtlCache::new());
        let scoreboard = ScoreboardService::new(provider.clone(), cache.clone(), config);

        Self {
            provider,
            cache,
            scoreboard,
            site_url_configured: false,
            ga4_property_configured: false,
            started_at: Instant::now(),
        }
    }

    pub fn with_configured(mut self, site_url: bool, ga4_property: bool) -> Self {
        self.site_url_configured = site_url;
        self.ga4_property_configured = ga4_property;
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        self.scoreboard.config().cache_ttl()
    }
}
