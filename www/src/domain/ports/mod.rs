//! Domain ports (traits)
//!
//! Port traits define interfaces that the page layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed;

pub use feed::FeedSummarizer;
