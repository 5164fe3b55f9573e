//! Integration tests for the build pipeline
//!
//! These tests use wiremock to stand in for both the rendered site and the
//! Gemini endpoint, and run complete builds against a temporary directory.

use agent_pages::config::{CacheConfig, Config, OutputConfig, SiteConfig, TransformerConfig};
use agent_pages::pipeline::run_build;
use agent_pages::{digest, AgentPagesError, ConfigError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "test-model";

/// Creates a test configuration writing under `dir`
fn create_test_config(
    site_url: &str,
    api_base: &str,
    pages: &[&str],
    api_key: Option<&str>,
    dir: &Path,
) -> Config {
    Config {
        site: SiteConfig {
            base_url: site_url.to_string(),
            pages: pages.iter().map(|p| p.to_string()).collect(),
        },
        output: OutputConfig {
            dir: dir.join("public").join("ai").display().to_string(),
            public_path: None,
        },
        transformer: TransformerConfig {
            model: MODEL.to_string(),
            api_key: api_key.map(str::to_string),
            language: "Polish".to_string(),
            api_base: api_base.to_string(),
            timeout_secs: 5,
        },
        cache: CacheConfig {
            dir: dir.join("cache").display().to_string(),
            keep_raw_content: true,
        },
    }
}

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_build_then_rebuild_uses_cache() {
    let site = MockServer::start().await;
    let gemini = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let raw = "<html><body><script>x</script><h1>Hi</h1></body></html>";
    mount_page(&site, "/", raw).await;

    let config = create_test_config(&site.uri(), &gemini.uri(), &["/"], Some("key"), dir.path());

    // First build: one model call
    {
        let _guard = Mock::given(method("POST"))
            .and(path(format!("/v1beta/models/{}:generateContent", MODEL)))
            .and(header("x-goog-api-key", "key"))
            .respond_with(gemini_reply("# Cześć"))
            .expect(1)
            .mount_as_scoped(&gemini)
            .await;

        let outcome = run_build(&config).await.unwrap();
        assert!(outcome.report.is_complete());
        assert_eq!(outcome.report.transformed(), 1);
    }

    let page_file = dir.path().join("public").join("ai").join("index.md");
    assert_eq!(std::fs::read_to_string(&page_file).unwrap(), "# Cześć");

    let cache: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("cache").join("cache.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(cache["/"]["hash"], digest(raw).as_str());
    assert_eq!(cache["/"]["polishContent"], "# Cześć");
    assert_eq!(cache["/"]["content"], raw);

    // Second build over unchanged content: no model calls at all
    Mock::given(method("POST"))
        .respond_with(gemini_reply("unused"))
        .expect(0)
        .mount(&gemini)
        .await;

    let outcome = run_build(&config).await.unwrap();
    assert_eq!(outcome.report.cache_hits(), 1);
    assert_eq!(std::fs::read_to_string(&page_file).unwrap(), "# Cześć");

    let manifest = std::fs::read_to_string(&outcome.discovery.manifest_path).unwrap();
    assert_eq!(outcome.discovery.manifest_path, dir.path().join("public").join("llms.txt"));
    assert_eq!(
        manifest,
        "# AI Agent Map\n\n- [/](/ai/index.md): Content for /"
    );
    assert_eq!(
        outcome.discovery.robots_snippet,
        "User-agent: *\nAllow: /ai/index.md"
    );
}

#[tokio::test]
async fn test_failed_page_is_left_out_of_manifest() {
    let site = MockServer::start().await;
    let gemini = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(&site, "/", "<body><p>home</p></body>").await;
    mount_page(&site, "/pricing", "<body><p>pricing</p></body>").await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&site)
        .await;

    Mock::given(method("POST"))
        .respond_with(gemini_reply("# Strona"))
        .expect(2)
        .mount(&gemini)
        .await;

    let config = create_test_config(
        &site.uri(),
        &gemini.uri(),
        &["/", "/missing", "/pricing"],
        Some("key"),
        dir.path(),
    );
    let outcome = run_build(&config).await.unwrap();

    assert_eq!(outcome.report.generated.len(), 2);
    assert_eq!(outcome.report.failed.len(), 1);
    assert_eq!(outcome.report.failed[0].page_id, "/missing");

    let manifest = std::fs::read_to_string(&outcome.discovery.manifest_path).unwrap();
    let entries: Vec<&str> = manifest.lines().filter(|l| l.starts_with("- ")).collect();
    assert_eq!(
        entries,
        vec![
            "- [/](/ai/index.md): Content for /",
            "- [/pricing](/ai/pricing.md): Content for /pricing",
        ]
    );
    assert!(!dir
        .path()
        .join("public")
        .join("ai")
        .join("missing.md")
        .exists());
}

#[tokio::test]
async fn test_model_error_fails_only_that_page() {
    let site = MockServer::start().await;
    let gemini = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(&site, "/", "<body><p>home</p></body>").await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&gemini)
        .await;

    let config = create_test_config(&site.uri(), &gemini.uri(), &["/"], Some("key"), dir.path());
    let outcome = run_build(&config).await.unwrap();

    assert_eq!(outcome.report.failed.len(), 1);
    assert!(outcome.report.failed[0].message.contains("500"));
    assert!(!dir.path().join("cache").join("cache.json").exists());

    let manifest = std::fs::read_to_string(&outcome.discovery.manifest_path).unwrap();
    assert_eq!(manifest, "# AI Agent Map\n");
}

#[tokio::test]
async fn test_missing_credential_fails_before_fetching() {
    let site = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<body></body>"))
        .expect(0)
        .mount(&site)
        .await;

    let config = create_test_config(&site.uri(), &site.uri(), &["/"], None, dir.path());
    let result = run_build(&config).await;

    assert!(matches!(
        result,
        Err(AgentPagesError::Config(ConfigError::MissingCredential(_)))
    ));
    assert!(!dir.path().join("public").exists());
}

#[tokio::test]
async fn test_mock_transformer_runs_offline() {
    let site = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(&site, "/docs/intro", "<body><h1>Intro</h1></body>").await;

    let config = create_test_config(
        &site.uri(),
        "http://127.0.0.1:9",
        &["/docs/intro"],
        Some("MOCK"),
        dir.path(),
    );
    let outcome = run_build(&config).await.unwrap();

    assert!(outcome.report.is_complete());
    let written = std::fs::read_to_string(
        dir.path().join("public").join("ai").join("docs_intro.md"),
    )
    .unwrap();
    assert!(!written.is_empty());
}
