//! Site-level optimization checks: robots.txt, sitemap and gzip.
//!
//! These are the only network-backed signals besides the favicon fallback.
//! Each request is bounded by the request timeout; any failure means the
//! signal is absent and is logged at debug level.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::debug;

use crate::http::{self, FetchError, HttpFetcher, HttpResponse};
use crate::patterns::ROBOTS_SITEMAP;
use crate::url_utils::Site;

/// Results of the optimization checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizationReport {
    pub robots_txt: bool,
    pub sitemap_urls: BTreeSet<String>,
    pub gzip: bool,
}

/// Run all optimization checks for `site`.
///
/// The robots/sitemap chain and the gzip check are independent and run
/// concurrently.
pub async fn check(fetcher: &dyn HttpFetcher, site: &Site, timeout: Duration) -> OptimizationReport {
    let ((robots_txt, sitemap_urls), gzip) =
        tokio::join!(robots_and_sitemaps(fetcher, site, timeout), gzip(fetcher, site, timeout));

    OptimizationReport {
        robots_txt,
        sitemap_urls,
        gzip,
    }
}

/// Fetch robots.txt and collect sitemap URLs.
///
/// Sitemaps declared in robots.txt win; otherwise `/sitemap.xml` is requested.
/// An HTML answer is a soft 404, not a robots file.
async fn robots_and_sitemaps(fetcher: &dyn HttpFetcher, site: &Site, timeout: Duration) -> (bool, BTreeSet<String>) {
    let robots_url = site.join("/robots.txt");
    let robots = logged(&robots_url, http::bounded(timeout, fetcher.get(&robots_url)).await)
        .filter(|r| r.is_success() && !r.is_html());

    let robots_txt = robots.is_some();
    let mut sitemaps = robots.map(|r| sitemaps_from_robots(&r.body)).unwrap_or_default();

    if sitemaps.is_empty() {
        let sitemap_url = site.join("/sitemap.xml");
        if exists(fetcher, &sitemap_url, timeout).await {
            sitemaps.insert(sitemap_url);
        }
    }

    (robots_txt, sitemaps)
}

/// `Sitemap:` directives of a robots.txt body.
#[must_use]
pub fn sitemaps_from_robots(body: &str) -> BTreeSet<String> {
    ROBOTS_SITEMAP
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// HEAD the URL, retrying with GET when HEAD is not allowed.
async fn exists(fetcher: &dyn HttpFetcher, url: &str, timeout: Duration) -> bool {
    match logged(url, http::bounded(timeout, fetcher.head(url)).await) {
        Some(response) if response.status == 405 => logged(url, http::bounded(timeout, fetcher.get(url)).await)
            .is_some_and(|r| r.is_success()),
        Some(response) => response.is_success(),
        None => false,
    }
}

/// Whether the site root is served gzip-compressed.
async fn gzip(fetcher: &dyn HttpFetcher, site: &Site, timeout: Duration) -> bool {
    let url = site.join("/");

    if let Some(response) = logged(&url, http::bounded(timeout, fetcher.head(&url)).await) {
        if is_gzip(&response) {
            return true;
        }
    }

    logged(&url, http::bounded(timeout, fetcher.get(&url)).await).is_some_and(|r| is_gzip(&r))
}

fn is_gzip(response: &HttpResponse) -> bool {
    response
        .header("content-encoding")
        .is_some_and(|enc| enc.to_ascii_lowercase().contains("gzip"))
}

fn logged(url: &str, result: Result<HttpResponse, FetchError>) -> Option<HttpResponse> {
    result
        .map_err(|e| debug!(%url, error = %e, "optimization request failed"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_sitemap_directives() {
        let body = "User-agent: *\nDisallow: /admin\nSitemap: https://example.com/sitemap_index.xml\n  sitemap : https://example.com/news.xml\r\n# Sitemap: ignored comment";
        let sitemaps = sitemaps_from_robots(body);
        assert_eq!(sitemaps.len(), 2);
        assert!(sitemaps.contains("https://example.com/sitemap_index.xml"));
        assert!(sitemaps.contains("https://example.com/news.xml"));
    }

    #[test]
    fn gzip_header_is_case_insensitive() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("content-encoding".into(), "GZIP".into())],
            body: String::new(),
        };
        assert!(is_gzip(&response));
        assert!(!is_gzip(&HttpResponse::default()));
    }
}
