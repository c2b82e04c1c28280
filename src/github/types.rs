//! GitHub API type definitions

use serde::{Deserialize, Serialize};
use tagsmith_core::RepoProperties;

/// Git object a reference points at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    #[serde(default)]
    pub sha: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Tag reference returned by `GET /repos/{repo}/git/refs/tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    pub object: Object,
}

/// The refs endpoint answers with a single ref or a list of them
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagRefs {
    One(Tag),
    Many(Vec<Tag>),
}

impl TagRefs {
    /// Pick the ref for `tag_name`.
    ///
    /// A single ref is taken as-is. In a list, the entry named
    /// `refs/tags/{tag_name}` wins; a list whose entries carry no names
    /// falls back to its first entry.
    pub fn select(self, tag_name: &str) -> Option<Tag> {
        match self {
            TagRefs::One(tag) => Some(tag),
            TagRefs::Many(tags) => {
                let wanted = format!("refs/tags/{}", tag_name);
                if tags.iter().any(|t| t.git_ref.is_some()) {
                    tags.into_iter()
                        .find(|t| t.git_ref.as_deref() == Some(wanted.as_str()))
                } else {
                    tags.into_iter().next()
                }
            }
        }
    }
}

/// Request body for `POST /repos/{repo}/releases`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    pub target_commitish: String,
    pub name: String,
    pub body: String,
    pub prerelease: bool,
    pub draft: bool,
}

impl GitHubRelease {
    /// Release for `props.tag` at `props.hash`, named after the tag
    pub fn from_properties(props: &RepoProperties) -> Self {
        Self {
            tag_name: props.tag.clone(),
            target_commitish: props.hash.clone(),
            name: props.tag.clone(),
            body: props.body_text().to_string(),
            prerelease: false,
            draft: false,
        }
    }
}

/// Release as returned by the API after creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub target_commitish: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub draft: bool,
}

/// Single entry of a GitHub validation error list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubError {
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error body returned on 4xx/5xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubBadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<GitHubError>,
}

impl GitHubBadResponse {
    pub const ALREADY_EXISTS: &'static str = "already_exists";

    pub fn codes(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.code.clone()).collect()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

/// Classified answer of the tag refs lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    /// 404: the tag does not exist
    NotFound,
    /// 200 with a decodable ref
    Found { sha: String },
    /// 200 whose body could not be decoded or named no ref for the tag
    Unreadable,
    /// Any other status
    Unexpected { status: u16 },
}

/// Classified answer of the release creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// 201
    Created(ReleaseResponse),
    /// Error body carrying the `already_exists` code
    AlreadyExists,
    /// Every other status, with whatever error codes the body carried
    Rejected { status: u16, codes: Vec<String> },
}
