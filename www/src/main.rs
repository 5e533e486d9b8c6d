//! SVNKit site server
//!
//! Serves the "Get SVNKit Library" download page with its release feed summary.
//! Uses hexagonal (ports & adapters) architecture: the feed summarizer is a port
//! injected into the page service.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;
mod page;

#[cfg(test)]
mod test_utils;


use adapters::{FeedSource, NoopFeedSummarizer, RssFeedSummarizer};
use app::DownloadPageService;
use config::Config;
use domain::ports::FeedSummarizer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub download_page: Arc<DownloadPageService>,
}

/// Build the site's router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/download/library.php", get(handlers::get_library_page))
        .route("/download/library", get(handlers::get_library_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Pick the feed summarizer for the configured source
fn build_summarizer(config: &Config) -> anyhow::Result<Arc<dyn FeedSummarizer>> {
    match &config.feed_source {
        Some(source) => {
            let source = FeedSource::parse(source).context("Invalid FEED_SOURCE")?;
            tracing::info!("Release feed source: {:?}", source);
            let summarizer =
                RssFeedSummarizer::new(source, config.feed_item_limit, config.feed_timeout)
                    .context("Failed to build feed HTTP client")?
                    .with_max_bytes(config.feed_max_bytes);
            Ok(Arc::new(summarizer))
        }
        None => {
            tracing::warn!("FEED_SOURCE not set, release table will be empty");
            Ok(Arc::new(NoopFeedSummarizer))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,svnkit_www=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SVNKit site...");

    // Load configuration
    let config = Config::from_env()?;

    let summarizer = build_summarizer(&config)?;
    let download_page = Arc::new(DownloadPageService::new(
        summarizer,
        config.site_url.clone(),
        config.fragment_policy,
    ));

    let app = app_router(AppState { download_page });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
