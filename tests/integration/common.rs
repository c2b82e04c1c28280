//! Common utilities for integration tests

use std::sync::Once;
use tagsmith::RepoProperties;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REFS_PATH: &str = "/repos/repo/git/refs/tags";
pub const RELEASES_PATH: &str = "/repos/repo/releases";

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (enable with `RUST_LOG`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Properties for `repo` / `tag` pointed at `server`
pub fn props(server: &MockServer, tag: &str, hash: &str) -> RepoProperties {
    init_tracing();
    RepoProperties::new("username", "password", "repo", tag, hash)
        .with_host(server.uri())
        .with_body("hello")
}

/// Body of a tag ref pointing at `sha`
pub fn tag_ref(sha: &str) -> serde_json::Value {
    serde_json::json!({ "object": { "sha": sha } })
}

/// Error body carrying a single error `code`
pub fn error_body(code: &str) -> serde_json::Value {
    serde_json::json!({ "errors": [{ "code": code }] })
}

pub async fn mount_lookup(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(REFS_PATH))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_release(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(RELEASES_PATH))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}
