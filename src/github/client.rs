//! GitHub API client implementation

use crate::core::{RepoProperties, TagsmithResult};
use crate::di::traits::GitHubProvider;
use crate::github::types::{
    GitHubBadResponse, GitHubRelease, ReleaseOutcome, ReleaseResponse, TagLookup, TagRefs,
};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use tracing::{debug, info, warn};

/// GitHub API client
///
/// Holds no repository state; every call takes the [`RepoProperties`] it
/// operates on, including the host to talk to.
#[derive(Clone)]
pub struct GitHubClient {
    http_client: HttpClient,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new() -> TagsmithResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("tagsmith"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let http_client = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self { http_client })
    }

    /// Base URL requests for `props` are sent to
    pub fn api_base(props: &RepoProperties) -> &str {
        props.api_host()
    }

    /// Look up the tag refs of the repository and classify the answer
    pub async fn lookup_tag(&self, props: &RepoProperties) -> TagsmithResult<TagLookup> {
        let url = format!("{}/repos/{}/git/refs/tags", Self::api_base(props), props.repo);
        debug!(%url, tag = %props.tag, "Looking up tag refs");

        let response = self
            .http_client
            .get(&url)
            .basic_auth(&props.username, Some(&props.password))
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Tag refs lookup answered");

        if status == StatusCode::NOT_FOUND {
            return Ok(TagLookup::NotFound);
        }

        if status != StatusCode::OK {
            return Ok(TagLookup::Unexpected {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let refs: TagRefs = match serde_json::from_slice(&bytes) {
            Ok(refs) => refs,
            Err(e) => {
                warn!(error = %e, "Failed to parse tag refs response");
                return Ok(TagLookup::Unreadable);
            }
        };

        Ok(match refs.select(&props.tag) {
            Some(tag) => TagLookup::Found {
                sha: tag.object.sha,
            },
            None => TagLookup::Unreadable,
        })
    }

    /// Create a release for `props.tag` pointing at `props.hash`
    pub async fn create_release(&self, props: &RepoProperties) -> TagsmithResult<ReleaseOutcome> {
        let url = format!("{}/repos/{}/releases", Self::api_base(props), props.repo);
        let release = GitHubRelease::from_properties(props);
        debug!(%url, tag = %release.tag_name, target = %release.target_commitish, "Creating release");

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&props.username, Some(&props.password))
            .json(&release)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await.unwrap_or_default();

        if status == StatusCode::CREATED {
            let created = serde_json::from_slice::<ReleaseResponse>(&body).unwrap_or_else(|e| {
                warn!(error = %e, "Release created but response could not be parsed");
                ReleaseResponse {
                    tag_name: release.tag_name.clone(),
                    ..ReleaseResponse::default()
                }
            });
            info!(tag = %release.tag_name, url = ?created.html_url, "Release created");
            return Ok(ReleaseOutcome::Created(created));
        }

        let bad: GitHubBadResponse = serde_json::from_slice(&body).unwrap_or_default();
        if bad.has_code(GitHubBadResponse::ALREADY_EXISTS) {
            warn!(tag = %release.tag_name, "Release already exists");
            return Ok(ReleaseOutcome::AlreadyExists);
        }

        warn!(
            status = status.as_u16(),
            message = ?bad.message,
            codes = ?bad.codes(),
            "Release creation rejected"
        );
        Ok(ReleaseOutcome::Rejected {
            status: status.as_u16(),
            codes: bad.codes(),
        })
    }
}

#[async_trait]
impl GitHubProvider for GitHubClient {
    async fn lookup_tag(&self, props: &RepoProperties) -> TagsmithResult<TagLookup> {
        Self::lookup_tag(self, props).await
    }

    async fn create_release(&self, props: &RepoProperties) -> TagsmithResult<ReleaseOutcome> {
        Self::create_release(self, props).await
    }
}
