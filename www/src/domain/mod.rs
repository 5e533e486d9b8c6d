//! Domain layer
//!
//! Contains the page's data model with no external dependencies.
//! - `entities`: Domain models representing feed content
//! - `ports`: Trait definitions for external collaborators

pub mod entities;
pub mod ports;
