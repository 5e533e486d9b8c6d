//! Domain entities
//!
//! Pure models for the content shown on the site's pages.

pub mod feed_entry;

pub use feed_entry::FeedEntry;
