//! Feed entry domain entity
//!
//! One release announcement taken from the site's syndication feed.

use chrono::{DateTime, Utc};

/// A single feed item, normalised across RSS 1.0, RSS 2.0 and Atom
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    /// Absolute link to the announcement
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    /// Plain text summary, markup already stripped
    pub summary: Option<String>,
}

impl FeedEntry {
    /// Day the entry was published, formatted for the release table
    pub fn published_day(&self) -> Option<String> {
        self.published.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Order entries newest first; undated entries sink to the bottom
pub fn newest_first(entries: &mut [FeedEntry]) {
    entries.sort_by(|a, b| b.published.cmp(&a.published));
}
