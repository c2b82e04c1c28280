use crate::core::error::{TagsmithError, TagsmithResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Public GitHub API host, used when no override is configured
pub const DEFAULT_API_HOST: &str = "https://api.github.com";

/// Environment variable that supplies the password/token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable that supplies the API host override
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Everything needed to validate a tag and create its release.
///
/// Loaded from YAML or built in code; one value describes one operation.
///
/// ```yaml
/// username: octocat
/// password: ghp_xxx
/// repo: octocat/hello-world
/// tag: v1.2.0
/// hash: 3f786850e387550fdab836ed7e6dc881de23001b
/// host: https://github.example.com/api/v3   # optional
/// body: Release notes                        # optional
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoProperties {
    #[serde(default)]
    pub username: String,

    /// Password or personal access token
    #[serde(default)]
    pub password: String,

    /// Repository identifier, usually `owner/name`
    pub repo: String,

    pub tag: String,

    /// Commit the tag is expected to point at
    pub hash: String,

    /// API host override for enterprise or self-hosted instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Release body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RepoProperties {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        repo: impl Into<String>,
        tag: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            repo: repo.into(),
            tag: tag.into(),
            hash: hash.into(),
            host: None,
            body: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Parse properties from a YAML document
    pub fn from_yaml_str(content: &str) -> TagsmithResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| TagsmithError::Config(format!("Failed to parse properties: {}", e)))
    }

    /// Load properties from a YAML file
    pub fn load(path: &Path) -> TagsmithResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply `GITHUB_TOKEN` and `GITHUB_API_URL` from the environment.
    ///
    /// Environment values win over whatever was loaded from file. Empty
    /// variables are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(token) = non_empty_env(TOKEN_ENV) {
            self.password = token;
        }
        if let Some(host) = non_empty_env(API_URL_ENV) {
            self.host = Some(host);
        }
        self
    }

    /// Reject properties that cannot address a tag at all
    pub fn validate(&self) -> TagsmithResult<()> {
        for (field, value) in [("repo", &self.repo), ("tag", &self.tag), ("hash", &self.hash)] {
            if value.trim().is_empty() {
                return Err(TagsmithError::Config(format!("'{}' must not be empty", field)));
            }
        }
        Ok(())
    }

    /// Effective API base URL, without a trailing slash
    pub fn api_host(&self) -> &str {
        match self.host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => host.trim_end_matches('/'),
            _ => DEFAULT_API_HOST,
        }
    }

    /// Release body text, empty when none was configured
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for RepoProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepoProperties")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("repo", &self.repo)
            .field("tag", &self.tag)
            .field("hash", &self.hash)
            .field("host", &self.host)
            .field("body", &self.body)
            .finish()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
