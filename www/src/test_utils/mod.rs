//! Test utilities
//!
//! Manual mock implementations, fixtures and HTML assertions for unit testing.
//!
//! Mocks are hand-written: the summarizer port is a single method, and tests
//! want to inspect exactly which site URL was passed in.

pub mod fixtures;
pub mod html;
pub mod mocks;

pub use fixtures::*;
pub use html::*;
pub use mocks::*;
