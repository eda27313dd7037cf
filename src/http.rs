//! HTTP collaborator used by the favicon and optimization checks.
//!
//! The core only needs status, headers and body. Transport failures are
//! reported as [`FetchError`] and turned into "signal absent" by the checks;
//! they never abort an analysis.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

/// User-Agent string for outgoing requests.
pub const USER_AGENT: &str = concat!("rs-seo-audit/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects to follow.
pub const MAX_REDIRECTS: usize = 5;

/// Default timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A fetched response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header pairs with lower-cased names, in arrival order.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body is declared as an HTML page.
    ///
    /// Many servers answer a missing file with a 200 error page; a caller
    /// expecting a text or binary resource treats such an answer as absent.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.header("content-type")
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"))
    }
}

/// Transport-level failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete within the request timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS, redirect or body-read failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Fetches URLs on behalf of the probing extractors.
///
/// Implementations follow redirects. Non-2xx statuses are successful
/// fetches, not errors.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;

    async fn head(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Bound a fetch by `timeout`, reporting expiry as [`FetchError::Timeout`].
pub async fn bounded<T, F>(timeout: Duration, request: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    tokio::time::timeout(timeout, request)
        .await
        .unwrap_or(Err(FetchError::Timeout))
}

#[cfg(feature = "http")]
pub use reqwest_fetcher::ReqwestFetcher;

#[cfg(feature = "http")]
mod reqwest_fetcher {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::{header, Client, Method};

    use super::{FetchError, HttpFetcher, HttpResponse, MAX_REDIRECTS, USER_AGENT};

    /// [`HttpFetcher`] backed by a shared `reqwest::Client`.
    ///
    /// Bodies are not decompressed: `Accept-Encoding: gzip` is sent
    /// explicitly so the gzip check can read the server's
    /// `Content-Encoding` answer.
    #[derive(Debug, Clone)]
    pub struct ReqwestFetcher {
        client: Client,
    }

    impl ReqwestFetcher {
        /// Build a fetcher whose requests time out after `timeout`.
        pub fn new(timeout: Duration) -> Result<Self, FetchError> {
            let client = Client::builder()
                .user_agent(USER_AGENT)
                .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
                .timeout(timeout)
                .build()
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(Self { client })
        }

        /// Wrap an existing client.
        #[must_use]
        pub fn with_client(client: Client) -> Self {
            Self { client }
        }

        async fn send(&self, method: Method, url: &str) -> Result<HttpResponse, FetchError> {
            let url = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
            let is_head = method == Method::HEAD;

            let response = self
                .client
                .request(method, url)
                .header(header::ACCEPT_ENCODING, "gzip")
                .send()
                .await
                .map_err(map_error)?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(k, v)| (k.as_str().to_ascii_lowercase(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
                .collect();

            let body = if is_head {
                String::new()
            } else {
                let bytes = response.bytes().await.map_err(map_error)?;
                String::from_utf8_lossy(&bytes).into_owned()
            };

            Ok(HttpResponse { status, headers, body })
        }
    }

    fn map_error(e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(e.to_string())
        }
    }

    #[async_trait]
    impl HttpFetcher for ReqwestFetcher {
        async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.send(Method::GET, url).await
        }

        async fn head(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.send(Method::HEAD, url).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("content-encoding".into(), "gzip".into())],
            body: String::new(),
        };
        assert_eq!(response.header("Content-Encoding"), Some("gzip"));
        assert_eq!(response.header("content-type"), None);
        assert!(response.is_success());
    }

    #[test]
    fn html_content_type_is_detected() {
        let page = HttpResponse {
            status: 200,
            headers: vec![("content-type".into(), "Text/HTML; charset=utf-8".into())],
            body: String::new(),
        };
        assert!(page.is_html());

        let plain = HttpResponse {
            headers: vec![("content-type".into(), "text/plain".into())],
            ..page
        };
        assert!(!plain.is_html());
        assert!(!HttpResponse::default().is_html());
    }

    #[test]
    fn redirects_and_errors_are_not_success() {
        for status in [301, 404, 500] {
            let response = HttpResponse { status, ..HttpResponse::default() };
            assert!(!response.is_success());
        }
    }

    #[tokio::test]
    async fn bounded_maps_expiry_to_timeout() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, FetchError>(HttpResponse::default())
        };
        let result = bounded(Duration::from_millis(10), slow).await;
        assert_eq!(result, Err(FetchError::Timeout));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn reqwest_fetcher_reports_gzip_header() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("HEAD"))
            .and(wiremock::matchers::header("accept-encoding", "gzip"))
            .respond_with(wiremock::ResponseTemplate::new(200).insert_header("Content-Encoding", "gzip"))
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new(DEFAULT_TIMEOUT).expect("client");
        let response = fetcher.head(&format!("{}/", server.uri())).await.expect("head");
        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-encoding"), Some("gzip"));
        assert!(response.body.is_empty());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn reqwest_fetcher_rejects_invalid_url() {
        let fetcher = ReqwestFetcher::new(DEFAULT_TIMEOUT).expect("client");
        let err = fetcher.get("not a url").await.expect_err("invalid");
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
