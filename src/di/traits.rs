//! Trait definitions for dependency injection

use crate::core::{RepoProperties, TagsmithResult};
use crate::github::types::{ReleaseOutcome, TagLookup};
use async_trait::async_trait;

/// Trait for the two GitHub calls the tagging flow depends on
///
/// `Err` is reserved for failures where no HTTP answer was obtained
/// (connection refused, DNS, TLS). Every answered request is classified
/// into the returned enum instead.
#[async_trait]
pub trait GitHubProvider: Send + Sync {
    /// Look up the tag refs of `props.repo` and classify the answer
    async fn lookup_tag(&self, props: &RepoProperties) -> TagsmithResult<TagLookup>;

    /// Create a release for `props.tag` at `props.hash`
    async fn create_release(&self, props: &RepoProperties) -> TagsmithResult<ReleaseOutcome>;
}
