use std::env;
use std::time::Duration;

use url::Url;

use crate::adapters::rss::DEFAULT_MAX_FEED_BYTES;
use crate::app::FragmentPolicy;
use crate::error::ConfigError;

pub const DEFAULT_SITE_URL: &str = "http://www.svnkit.com/";
const DEFAULT_FEED_ITEM_LIMIT: usize = 5;
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical site URL handed to the feed summarizer
    pub site_url: String,
    /// Where the release feed lives. `None` renders an empty feed section.
    pub feed_source: Option<String>,
    pub feed_item_limit: usize,
    pub feed_timeout: Duration,
    /// Largest feed document the summarizer will read
    pub feed_max_bytes: usize,
    /// How far the summarizer's HTML is trusted
    pub fragment_policy: FragmentPolicy,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = lookup("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        if let Err(e) = Url::parse(&site_url) {
            return Err(ConfigError::InvalidSiteUrl {
                value: site_url,
                reason: e.to_string(),
            });
        }

        Ok(Self {
            site_url,
            feed_source: lookup("FEED_SOURCE").filter(|s| !s.trim().is_empty()),
            feed_item_limit: lookup("FEED_ITEM_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FEED_ITEM_LIMIT),
            feed_timeout: Duration::from_secs(
                lookup("FEED_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_FEED_TIMEOUT_SECS),
            ),
            feed_max_bytes: lookup("FEED_MAX_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_FEED_BYTES),
            fragment_policy: lookup("FEED_FRAGMENT_POLICY")
                .map(|v| FragmentPolicy::from_setting(&v))
                .unwrap_or_default(),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}
