//! Tagsmith: GitHub tag validation and release creation
//!
//! This crate re-exports the core types from `tagsmith-core` and provides
//! the GitHub client and the tagging flow built on top of it.
//!
//! ```no_run
//! use tagsmith::RepoProperties;
//!
//! # async fn example() {
//! let props = RepoProperties::new("octocat", "ghp_xxx", "octocat/hello", "v1.0.0", "3f78685")
//!     .with_body("First stable release");
//!
//! if tagsmith::tagging::create_tag(&props).await {
//!     println!("release ready");
//! }
//! # }
//! ```

pub use tagsmith_core::{RepoProperties, TagsmithError, TagsmithResult, DEFAULT_API_HOST};

/// Core module re-exported from tagsmith-core.
pub mod core {
    pub use tagsmith_core::core::*;
    pub use tagsmith_core::*;
}

/// GitHub API client and payload types.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;

/// Tag validation and release creation.
pub mod tagging;

pub use tagging::{create_tag, validate_tag, Tagger, ValidationResult};
