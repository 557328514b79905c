use anyhow::Context;
use clap::Parser;
use searchlight_core::{DataProvider, StaticProvider};
use searchlight_server::config::ServerArgs;
use searchlight_server::google::GoogleProvider;
use searchlight_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = ServerArgs::parse();

    info!("🔦 Searchlight is initializing...");

    let provider: Arc<dyn DataProvider> = match args.google_settings() {
        Some(settings) => {
            info!("🔗 GSC site: {}", settings.site_url);
            info!("📈 GA4 property: {}", settings.property_id);
            Arc::new(GoogleProvider::new(settings).context("building Google API client")?)
        }
        None => match &args.fixtures {
            Some(path) => Arc::new(
                StaticProvider::load_from_file(path)
                    .with_context(|| format!("loading fixtures from {:?}", path))?,
            ),
            None => {
                warn!("⚠️ Google credentials not configured. Serving empty mock data.");
                Arc::new(StaticProvider::empty())
            }
        },
    };

    let mode = provider.mode();
    let state = AppState::new(provider, args.scoreboard.clone()).with_configured(
        args.gsc_site_url.is_some(),
        args.ga4_property_id.is_some(),
    );
    info!(
        "⏰ Mode: {} | Cache TTL: {}s",
        mode,
        state.cache_ttl().as_secs()
    );
    if let Some(days) = args.scoreboard.trend_window() {
        info!("📉 Trend rules enabled over {}-day windows", days);
    }

    let app = searchlight_server::app(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 Searchlight listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("🛑 Shutdown requested, draining connections");
}
