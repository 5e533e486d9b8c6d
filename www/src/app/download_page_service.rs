//! Download page service
//!
//! Produces the "Get SVNKit Library" page. The release feed is the only
//! dynamic part; when it cannot be produced the page renders without it.

use std::sync::Arc;

use crate::app::FragmentPolicy;
use crate::domain::ports::FeedSummarizer;
use crate::page::render_download_page;

/// Service rendering the download page
pub struct DownloadPageService {
    summarizer: Arc<dyn FeedSummarizer>,
    site_url: String,
    policy: FragmentPolicy,
}

impl DownloadPageService {
    pub fn new(
        summarizer: Arc<dyn FeedSummarizer>,
        site_url: String,
        policy: FragmentPolicy,
    ) -> Self {
        Self {
            summarizer,
            site_url,
            policy,
        }
    }

    /// Render the full page. Never fails: a broken feed yields an empty
    /// release table.
    pub async fn render(&self) -> String {
        let fragment = self.feed_fragment().await;
        render_download_page(&fragment)
    }

    async fn feed_fragment(&self) -> String {
        match self.summarizer.summarize(&self.site_url).await {
            Ok(fragment) => {
                tracing::debug!(bytes = fragment.len(), "Feed summary produced");
                self.policy.apply(&fragment)
            }
            Err(e) => {
                tracing::warn!("Feed summary unavailable for {}: {}", self.site_url, e);
                String::new()
            }
        }
    }
}
