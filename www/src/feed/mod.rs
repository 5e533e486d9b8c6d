//! Feed module
//!
//! Release feed rendering for the download page's "Latest Stable Version"
//! table.

pub mod renderer;

pub use renderer::{collapse_whitespace, plain_text, render_feed_rows};
