//! RSS feed summarizer implementation
//!
//! Reads the release feed (RSS 1.0, RSS 2.0 or Atom), keeps the newest
//! entries and renders them as rows for the download page.

use std::time::Duration;

use async_trait::async_trait;
use feed_rs::model::{Feed, Text};
use reqwest::Client;
use url::Url;

use super::source::{FeedSource, ResolvedSource};
use crate::domain::entities::feed_entry::newest_first;
use crate::domain::entities::FeedEntry;
use crate::domain::ports::FeedSummarizer;
use crate::error::FeedError;
use crate::feed::{collapse_whitespace, plain_text, render_feed_rows};

/// Largest feed document read by default
pub const DEFAULT_MAX_FEED_BYTES: usize = 1024 * 1024;

/// Schemes a release link may carry into the page
const LINK_SCHEMES: &[&str] = &["http", "https"];

/// Feed summarizer reading an RSS/Atom document
pub struct RssFeedSummarizer {
    http: Client,
    source: FeedSource,
    item_limit: usize,
    max_bytes: usize,
}

impl RssFeedSummarizer {
    pub fn new(source: FeedSource, item_limit: usize, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            source,
            item_limit,
            max_bytes: DEFAULT_MAX_FEED_BYTES,
        })
    }

    /// Refuse feed documents larger than `max_bytes`
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    fn too_large(&self, location: impl ToString) -> FeedError {
        FeedError::TooLarge {
            limit: self.max_bytes,
            location: location.to_string(),
        }
    }

    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FeedError> {
        tracing::debug!("Fetching feed from {}", url);

        let mut response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes as u64)
        {
            return Err(self.too_large(url));
        }

        // Content-Length is optional; count what actually arrives
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(self.too_large(url));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    async fn load(&self, site_url: &Url) -> Result<Vec<u8>, FeedError> {
        match self.source.resolve(site_url)? {
            ResolvedSource::Remote(url) => self.fetch(&url).await,
            ResolvedSource::File(path) => {
                tracing::debug!("Reading feed from {}", path.display());
                if tokio::fs::metadata(&path).await?.len() > self.max_bytes as u64 {
                    return Err(self.too_large(path.display()));
                }
                Ok(tokio::fs::read(&path).await?)
            }
        }
    }
}

/// Text of a feed element; markup is only stripped from HTML content
fn text_content(text: &Text) -> String {
    if text.content_type.essence().to_string() == "text/html" {
        plain_text(&text.content)
    } else {
        collapse_whitespace(&text.content)
    }
}

/// Resolve a feed link against the site; only web links are kept
fn resolve_link(site_url: &Url, href: &str) -> Option<String> {
    site_url
        .join(href.trim())
        .ok()
        .filter(|url| LINK_SCHEMES.contains(&url.scheme()))
        .map(String::from)
}

/// Convert a parsed feed into entries with links resolved against the site.
///
/// An entry without a title is labelled with its summary, or failing that
/// its link. Entries with none of the three carry nothing to show and are
/// skipped.
fn to_entries(feed: Feed, site_url: &Url) -> Vec<FeedEntry> {
    feed.entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry
                .links
                .first()
                .and_then(|link| resolve_link(site_url, &link.href));

            let mut summary = entry
                .summary
                .map(|s| plain_text(&s.content))
                .filter(|s| !s.is_empty());

            let title = entry
                .title
                .as_ref()
                .map(text_content)
                .filter(|t| !t.is_empty())
                .or_else(|| summary.take())
                .or_else(|| link.clone())?;

            Some(FeedEntry {
                title,
                link,
                published: entry.published.or(entry.updated),
                summary,
            })
        })
        .collect()
}

#[async_trait]
impl FeedSummarizer for RssFeedSummarizer {
    async fn summarize(&self, site_url: &str) -> Result<String, FeedError> {
        let base = Url::parse(site_url)?;
        let body = self.load(&base).await?;

        let feed = feed_rs::parser::parse(body.as_slice())?;
        let mut entries = to_entries(feed, &base);
        newest_first(&mut entries);
        entries.truncate(self.item_limit);

        tracing::debug!(entries = entries.len(), "Rendering feed summary");
        Ok(render_feed_rows(&entries))
    }
}
