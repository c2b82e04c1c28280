//! Tag validation and release creation
//!
//! [`Tagger`] runs the two-step flow against any [`GitHubProvider`]:
//! look the tag up, then create a release when the tag is not already
//! pointing at the expected commit. Outcomes are reported as plain
//! booleans; the detail is logged through `tracing`.

pub mod creator;
pub mod validator;

pub use validator::ValidationResult;

use crate::core::RepoProperties;
use crate::di::GitHubProvider;
use crate::github::GitHubClient;
use tracing::warn;

/// Runs tag validation and release creation against a GitHub provider
pub struct Tagger<P: GitHubProvider> {
    github: P,
}

impl<P: GitHubProvider> Tagger<P> {
    pub fn new(github: P) -> Self {
        Self { github }
    }

    pub fn provider(&self) -> &P {
        &self.github
    }
}

/// Validate `props.tag` with a fresh [`GitHubClient`]
pub async fn validate_tag(props: &RepoProperties) -> ValidationResult {
    match GitHubClient::new() {
        Ok(client) => Tagger::new(client).validate_tag(props).await,
        Err(e) => {
            warn!(error = %e, "Failed to create GitHub client");
            ValidationResult::default()
        }
    }
}

/// Create the release for `props.tag` with a fresh [`GitHubClient`]
pub async fn create_tag(props: &RepoProperties) -> bool {
    match GitHubClient::new() {
        Ok(client) => Tagger::new(client).create_tag(props).await,
        Err(e) => {
            warn!(error = %e, "Failed to create GitHub client");
            false
        }
    }
}
