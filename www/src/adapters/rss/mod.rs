//! RSS adapter
//!
//! Feed summarizer backed by the site's RSS/Atom release feed.

pub mod client;
pub mod source;

pub use client::{RssFeedSummarizer, DEFAULT_MAX_FEED_BYTES};
pub use source::FeedSource;
