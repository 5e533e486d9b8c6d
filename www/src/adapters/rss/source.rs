//! Feed source locations

use std::path::PathBuf;

use url::Url;

use crate::error::FeedError;

/// Where the release feed is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Absolute http(s) URL
    Remote(Url),
    /// Local file, given as a `file://` URL
    File(PathBuf),
    /// Reference resolved against the site URL at summarize time
    Relative(String),
}

impl FeedSource {
    pub fn parse(value: &str) -> Result<Self, FeedError> {
        let value = value.trim();

        match Url::parse(value) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(FeedSource::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(FeedSource::File)
                    .map_err(|_| FeedError::InvalidUrl(value.to_string())),
                other => Err(FeedError::InvalidUrl(format!(
                    "unsupported scheme '{}' in {}",
                    other, value
                ))),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(FeedSource::Relative(value.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve a relative source against the site URL
    pub fn resolve(&self, site_url: &Url) -> Result<ResolvedSource, FeedError> {
        match self {
            FeedSource::Remote(url) => Ok(ResolvedSource::Remote(url.clone())),
            FeedSource::File(path) => Ok(ResolvedSource::File(path.clone())),
            FeedSource::Relative(reference) => {
                Ok(ResolvedSource::Remote(site_url.join(reference)?))
            }
        }
    }
}

/// A feed location ready to be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    Remote(Url),
    File(PathBuf),
}
