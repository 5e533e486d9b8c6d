//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod noop;
pub mod rss;

pub use noop::NoopFeedSummarizer;
pub use rss::{FeedSource, RssFeedSummarizer};
