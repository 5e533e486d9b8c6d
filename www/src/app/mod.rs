//! Application layer
//!
//! Contains the page use cases.
//! Services coordinate between the page renderer and the feed collaborator.

pub mod download_page_service;
pub mod sanitize;

pub use download_page_service::DownloadPageService;
pub use sanitize::FragmentPolicy;
