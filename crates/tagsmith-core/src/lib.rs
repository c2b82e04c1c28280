//! Core types shared by the Tagsmith crates
//!
//! Holds the error type and the repository properties that describe a
//! single tag validation or release creation.

pub mod core;

pub use crate::core::error::{TagsmithError, TagsmithResult};
pub use crate::core::properties::{RepoProperties, DEFAULT_API_HOST};
