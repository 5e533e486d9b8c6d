//! Feed renderer
//!
//! Renders feed entries to HTML table rows.

use std::sync::OnceLock;

use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};
use regex::Regex;

use crate::domain::entities::FeedEntry;

/// Render feed entries as `<tr>` rows, one per entry
pub fn render_feed_rows(entries: &[FeedEntry]) -> String {
    let mut buf = String::new();

    for entry in entries {
        buf.push_str(&render_row(entry));
        buf.push('\n');
    }

    buf
}

fn render_row(entry: &FeedEntry) -> String {
    let day = entry.published_day().unwrap_or_default();

    let title = match &entry.link {
        Some(link) => format!(
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(link),
            encode_text(&entry.title)
        ),
        None => encode_text(&entry.title).into_owned(),
    };

    let summary = entry
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("<br />{}", encode_text(s)))
        .unwrap_or_default();

    format!(
        "<tr><td class=\"feed-date\" valign=\"top\">{}</td><td class=\"feed-item\">{}{}</td></tr>",
        day, title, summary
    )
}

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn whitespace_pattern() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Reduce feed markup to plain text: drop tags, decode entities, collapse
/// whitespace
pub fn plain_text(html: &str) -> String {
    let stripped = tag_pattern().replace_all(html, " ");
    let decoded = decode_html_entities(&stripped);
    collapse_whitespace(&decoded)
}

/// Trim and fold runs of whitespace into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    whitespace_pattern().replace_all(text.trim(), " ").into_owned()
}
