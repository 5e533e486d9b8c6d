//! Mock implementations of port traits
//!
//! In-memory summarizers that return canned output and record their calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::ports::FeedSummarizer;
use crate::error::FeedError;

// ============================================================================
// Static Feed Summarizer
// ============================================================================

/// Returns the same fragment on every call and remembers each site URL
pub struct StaticFeedSummarizer {
    fragment: String,
    calls: Arc<RwLock<Vec<String>>>,
}

impl StaticFeedSummarizer {
    pub fn new(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
            calls: Arc::default(),
        }
    }

    /// Site URLs received so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedSummarizer for StaticFeedSummarizer {
    async fn summarize(&self, site_url: &str) -> Result<String, FeedError> {
        self.calls.write().unwrap().push(site_url.to_string());
        Ok(self.fragment.clone())
    }
}

// ============================================================================
// Failing Feed Summarizer
// ============================================================================

/// Always fails, like an unreachable feed host
pub struct FailingFeedSummarizer;

#[async_trait]
impl FeedSummarizer for FailingFeedSummarizer {
    async fn summarize(&self, site_url: &str) -> Result<String, FeedError> {
        Err(FeedError::Status {
            status: 502,
            url: format!("{}rss2.xml", site_url),
        })
    }
}
