//! Feed summarizer port trait
//!
//! Defines the collaborator that turns the site's release feed into an HTML
//! fragment for the download page.

use async_trait::async_trait;

use crate::error::FeedError;

/// Produces an HTML fragment summarizing the most recent feed entries.
///
/// The fragment is placed inside a `<tbody>`, so implementations emit table
/// rows. An empty string means "nothing to show".
#[async_trait]
pub trait FeedSummarizer: Send + Sync {
    async fn summarize(&self, site_url: &str) -> Result<String, FeedError>;
}
