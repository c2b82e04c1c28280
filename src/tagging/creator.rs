use super::Tagger;
use crate::core::RepoProperties;
use crate::di::GitHubProvider;
use crate::github::ReleaseOutcome;
use tracing::{info, warn};

impl<P: GitHubProvider> Tagger<P> {
    /// Make sure a release exists for `props.tag` at `props.hash`.
    ///
    /// Returns `true` when the tag already points at `props.hash` (no
    /// release is requested) or when the release was created. A release
    /// rejected with `already_exists` returns `false`, like any other
    /// rejection or transport failure.
    pub async fn create_tag(&self, props: &RepoProperties) -> bool {
        if let Err(e) = props.validate() {
            warn!(error = %e, "Refusing to create release");
            return false;
        }

        let validation = self.validate_tag(props).await;
        if validation.tag_exists_with_provided_hash {
            info!(tag = %props.tag, hash = %props.hash, "Tag already exists at the expected commit");
            return true;
        }

        match self.github.create_release(props).await {
            Ok(ReleaseOutcome::Created(_)) => true,
            Ok(ReleaseOutcome::AlreadyExists) => false,
            Ok(ReleaseOutcome::Rejected { .. }) => false,
            Err(e) => {
                warn!(repo = %props.repo, error = %e, "Release request failed");
                false
            }
        }
    }
}
