//! Page module
//!
//! The "Get SVNKit Library" download page and its wire encoding.

pub mod renderer;

pub use renderer::{encode_page, render_download_page, HTML_CONTENT_TYPE};
