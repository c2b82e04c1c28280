//! GitHub integration for tag validation and release creation
//!
//! This module provides functionality for interacting with GitHub to:
//! - Look up the tag references of a repository
//! - Create a release for a tag at a given commit

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{GitHubRelease, ReleaseOutcome, Tag, TagLookup};
