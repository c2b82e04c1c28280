use super::Tagger;
use crate::core::RepoProperties;
use crate::di::GitHubProvider;
use crate::github::TagLookup;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of a tag lookup.
///
/// Both flags false means the state could not be determined: the host was
/// unreachable, credentials were rejected, the server failed, or the tag
/// points at a different commit. Callers cannot tell these apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub tag_doesnt_exist: bool,
    pub tag_exists_with_provided_hash: bool,
}

impl ValidationResult {
    pub fn from_lookup(lookup: &TagLookup, expected_hash: &str) -> Self {
        match lookup {
            TagLookup::NotFound => Self {
                tag_doesnt_exist: true,
                tag_exists_with_provided_hash: false,
            },
            TagLookup::Found { sha } => Self {
                tag_doesnt_exist: false,
                tag_exists_with_provided_hash: sha == expected_hash,
            },
            TagLookup::Unreadable | TagLookup::Unexpected { .. } => Self::default(),
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        !self.tag_doesnt_exist && !self.tag_exists_with_provided_hash
    }
}

impl<P: GitHubProvider> Tagger<P> {
    /// Check whether `props.tag` exists and points at `props.hash`
    pub async fn validate_tag(&self, props: &RepoProperties) -> ValidationResult {
        if let Err(e) = props.validate() {
            warn!(error = %e, "Refusing to look up tag");
            return ValidationResult::default();
        }

        let lookup = match self.github.lookup_tag(props).await {
            Ok(lookup) => lookup,
            Err(e) => {
                warn!(repo = %props.repo, error = %e, "Tag lookup failed");
                return ValidationResult::default();
            }
        };

        if let TagLookup::Found { sha } = &lookup {
            if sha != &props.hash {
                warn!(tag = %props.tag, found = %sha, expected = %props.hash, "Tag points at a different commit");
            }
        }

        let result = ValidationResult::from_lookup(&lookup, &props.hash);
        debug!(tag = %props.tag, ?lookup, ?result, "Tag validated");
        result
    }
}
