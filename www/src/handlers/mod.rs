//! HTTP handlers
//!
//! Axum request handlers for the site's pages.

pub mod download;
pub mod health;

pub use download::get_library_page;
pub use health::health;
