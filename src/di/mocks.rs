//! Mock implementations of service traits for testing

use super::traits::GitHubProvider;
use crate::core::{RepoProperties, TagsmithError, TagsmithResult};
use crate::github::types::{ReleaseOutcome, ReleaseResponse, TagLookup};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Call recorded by [`MockGitHubProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    LookupTag { repo: String, tag: String },
    CreateRelease { repo: String, tag: String, hash: String },
}

/// Mock GitHub provider for testing
///
/// Answers with canned results and records every call.
///
/// # Example
///
/// ```
/// use tagsmith::di::mocks::MockGitHubProvider;
/// use tagsmith::github::TagLookup;
///
/// let github = MockGitHubProvider::new().with_lookup(TagLookup::NotFound);
/// assert!(github.calls().is_empty());
/// ```
#[derive(Clone)]
pub struct MockGitHubProvider {
    /// `None` makes the lookup fail as if the host were unreachable
    pub lookup: Option<TagLookup>,
    /// `None` makes the release creation fail as if the host were unreachable
    pub release: Option<ReleaseOutcome>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGitHubProvider {
    pub fn new() -> Self {
        Self {
            lookup: Some(TagLookup::NotFound),
            release: Some(ReleaseOutcome::Created(ReleaseResponse::default())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_lookup(mut self, lookup: TagLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn with_release(mut self, release: ReleaseOutcome) -> Self {
        self.release = Some(release);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.lookup = None;
        self.release = None;
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of release creations attempted
    pub fn release_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RecordedCall::CreateRelease { .. }))
            .count()
    }

    fn unreachable_error() -> TagsmithError {
        TagsmithError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "mock host unreachable",
        ))
    }
}

impl Default for MockGitHubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitHubProvider for MockGitHubProvider {
    async fn lookup_tag(&self, props: &RepoProperties) -> TagsmithResult<TagLookup> {
        self.calls.lock().unwrap().push(RecordedCall::LookupTag {
            repo: props.repo.clone(),
            tag: props.tag.clone(),
        });
        self.lookup.clone().ok_or_else(Self::unreachable_error)
    }

    async fn create_release(&self, props: &RepoProperties) -> TagsmithResult<ReleaseOutcome> {
        self.calls.lock().unwrap().push(RecordedCall::CreateRelease {
            repo: props.repo.clone(),
            tag: props.tag.clone(),
            hash: props.hash.clone(),
        });
        self.release.clone().ok_or_else(Self::unreachable_error)
    }
}
