//! Dependency injection infrastructure for Tagsmith
//!
//! The tagging flow talks to GitHub only through [`GitHubProvider`], so
//! tests can swap the HTTP client for an in-memory mock.
//!
//! # Example (Production)
//! ```no_run
//! use tagsmith::github::GitHubClient;
//! use tagsmith::tagging::Tagger;
//!
//! # fn example() -> tagsmith::core::TagsmithResult<()> {
//! let tagger = Tagger::new(GitHubClient::new()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use tagsmith::di::mocks::MockGitHubProvider;
//! use tagsmith::tagging::Tagger;
//!
//! let tagger = Tagger::new(MockGitHubProvider::new());
//! ```

pub mod mocks;
pub mod traits;

// Re-export key types
pub use traits::GitHubProvider;
