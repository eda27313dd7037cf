use std::time::Duration;

use async_trait::async_trait;
use rs_seo_audit::w3c::{ValidatorMessage, ValidatorResponse};
use rs_seo_audit::{
    analyze, analyze_online, AnalyzeOptions, FetchError, HttpFetcher, HttpResponse, ReqwestFetcher, W3cSummary,
    W3cValidator,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!DOCTYPE html><html lang="en"><head><title>Fish market</title></head>
<body><h1>Fresh fish</h1><a href="/about">About</a></body></html>"#;

fn options() -> AnalyzeOptions {
    AnalyzeOptions {
        request_timeout: Duration::from_secs(2),
        ..AnalyzeOptions::default()
    }
}

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(Duration::from_secs(2)).expect("client")
}

/// Fetcher whose every request fails.
struct Unreachable;

#[async_trait]
impl HttpFetcher for Unreachable {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        Err(FetchError::Transport(format!("connection refused: {url}")))
    }

    async fn head(&self, url: &str) -> Result<HttpResponse, FetchError> {
        Err(FetchError::Transport(format!("connection refused: {url}")))
    }
}

/// Fetcher that never answers within the request timeout.
struct Stalled;

#[async_trait]
impl HttpFetcher for Stalled {
    async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(HttpResponse::default())
    }

    async fn head(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.get(url).await
    }
}

/// Validator returning a fixed message list.
struct FixedValidator(Vec<ValidatorMessage>);

#[async_trait]
impl W3cValidator for FixedValidator {
    async fn validate(&self, _url: &str) -> Result<ValidatorResponse, FetchError> {
        Ok(ValidatorResponse {
            messages: self.0.clone(),
        })
    }
}

struct DownValidator;

#[async_trait]
impl W3cValidator for DownValidator {
    async fn validate(&self, _url: &str) -> Result<ValidatorResponse, FetchError> {
        Err(FetchError::Timeout)
    }
}

#[tokio::test]
async fn robots_with_sitemap_and_gzip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "User-agent: *\nDisallow:\nSitemap: {}/sitemap_index.xml\n",
            server.uri()
        )))
        .mount(&server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).insert_header("Content-Encoding", "gzip"))
        .mount(&server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/favicon.ico"))
        .respond_with(ResponseTemplate::new(200).insert_header("Content-Type", "image/x-icon"))
        .mount(&server)
        .await;

    let facts = analyze_online(PAGE, &server.uri(), &options(), &fetcher(), None).await;

    assert!(facts.flags.robots_txt);
    assert!(facts.flags.gzip);
    assert_eq!(facts.optimization.sitemap_urls.len(), 1);
    assert!(facts
        .optimization
        .sitemap_urls
        .contains(&format!("{}/sitemap_index.xml", server.uri())));
    assert_eq!(facts.document.favicon, format!("{}/favicon.ico", server.uri()));
    assert_eq!(facts.w3c, W3cSummary::default());
}

#[tokio::test]
async fn sitemap_fallback_when_robots_is_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<urlset/>"))
        .mount(&server)
        .await;

    let facts = analyze_online(PAGE, &server.uri(), &options(), &fetcher(), None).await;

    assert!(!facts.flags.robots_txt);
    assert!(facts
        .optimization
        .sitemap_urls
        .contains(&format!("{}/sitemap.xml", server.uri())));
    assert!(!facts.flags.gzip);
}

#[tokio::test]
async fn html_soft_404_is_not_a_robots_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!("<html><body>Not found. Sitemap: {}/fake.xml</body></html>", server.uri()),
            "text/html",
        ))
        .mount(&server)
        .await;

    let facts = analyze_online(PAGE, &server.uri(), &options(), &fetcher(), None).await;

    assert!(!facts.flags.robots_txt);
    assert!(facts.optimization.sitemap_urls.is_empty());
}

#[tokio::test]
async fn html_error_page_is_not_a_favicon() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/favicon.ico"))
        .respond_with(ResponseTemplate::new(200).insert_header("Content-Type", "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let facts = analyze_online(PAGE, &server.uri(), &options(), &fetcher(), None).await;
    assert_eq!(facts.document.favicon, "");
}

#[tokio::test]
async fn declared_favicon_skips_request() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/favicon.ico"))
        .respond_with(ResponseTemplate::new(200).insert_header("Content-Type", "image/x-icon"))
        .expect(0)
        .mount(&server)
        .await;

    let html = r#"<head><link rel="icon" href="/static/icon.png"></head>"#;
    let facts = analyze_online(html, &server.uri(), &options(), &fetcher(), None).await;
    assert_eq!(facts.document.favicon, format!("{}/static/icon.png", server.uri()));
}

#[tokio::test]
async fn unreachable_site_leaves_signals_absent() {
    let offline = analyze(PAGE, "example.com", &options());
    let online = analyze_online(PAGE, "example.com", &options(), &Unreachable, None).await;

    assert!(!online.flags.robots_txt);
    assert!(!online.flags.gzip);
    assert!(online.optimization.sitemap_urls.is_empty());
    assert_eq!(online.document.favicon, "");
    assert_eq!(online, offline);
}

#[tokio::test]
async fn stalled_requests_time_out() {
    let options = AnalyzeOptions {
        request_timeout: Duration::from_millis(50),
        ..AnalyzeOptions::default()
    };

    let started = std::time::Instant::now();
    let facts = analyze_online(PAGE, "example.com", &options, &Stalled, None).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(!facts.flags.robots_txt);
    assert!(!facts.flags.gzip);
}

#[tokio::test]
async fn validator_summary_is_recorded() {
    let validator = FixedValidator(vec![
        ValidatorMessage {
            kind: "error".to_string(),
            sub_type: None,
            message: "Stray end tag.".to_string(),
            line: Some(4),
        },
        ValidatorMessage {
            kind: "info".to_string(),
            sub_type: Some("warning".to_string()),
            message: "Consider a lang attribute.".to_string(),
            line: Some(1),
        },
    ]);

    let facts = analyze_online(PAGE, "example.com", &options(), &Unreachable, Some(&validator)).await;

    assert!(!facts.w3c.valid);
    assert_eq!(facts.w3c.errors, 1);
    assert_eq!(facts.w3c.warnings, 1);
    assert_eq!(facts.w3c.messages[0].text, "Stray end tag.");
}

#[tokio::test]
async fn validator_failure_yields_default_summary() {
    let facts = analyze_online(PAGE, "example.com", &options(), &Unreachable, Some(&DownValidator)).await;
    assert_eq!(facts.w3c, W3cSummary::default());
}

#[tokio::test]
async fn unparseable_domain_skips_requests() {
    let facts = analyze_online(PAGE, "", &options(), &Stalled, None).await;
    assert!(!facts.flags.robots_txt);
    assert_eq!(facts.links.internal_count, 1);
}
