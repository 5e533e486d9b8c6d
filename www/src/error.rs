//! Error types for the SVNKit site
//!
//! - `FeedError`: failures of the feed-summary collaborator
//! - `ConfigError`: invalid startup configuration
//!
//! Feed errors never reach an HTTP caller: the download page degrades to an
//! empty feed section instead.

use thiserror::Error;

/// Feed-summary collaborator errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to read feed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Feed at {location} is larger than {limit} bytes")]
    TooLarge { limit: usize, location: String },

    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

impl From<feed_rs::parser::ParseFeedError> for FeedError {
    fn from(e: feed_rs::parser::ParseFeedError) -> Self {
        FeedError::Parse(e.to_string())
    }
}

impl From<url::ParseError> for FeedError {
    fn from(e: url::ParseError) -> Self {
        FeedError::InvalidUrl(e.to_string())
    }
}

/// Configuration errors raised while loading settings from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid SITE_URL '{value}': {reason}")]
    InvalidSiteUrl { value: String, reason: String },
}
