//! No-op feed summarizer
//!
//! Used when no feed source is configured: the release table stays empty.

use async_trait::async_trait;

use crate::domain::ports::FeedSummarizer;
use crate::error::FeedError;

pub struct NoopFeedSummarizer;

#[async_trait]
impl FeedSummarizer for NoopFeedSummarizer {
    async fn summarize(&self, _site_url: &str) -> Result<String, FeedError> {
        Ok(String::new())
    }
}
