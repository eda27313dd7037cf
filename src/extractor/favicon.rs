//! Favicon discovery: declared `<link rel="icon">` first, then the
//! conventional `/favicon.ico` location when probing is allowed.

use std::time::Duration;

use tracing::debug;

use crate::dom::{self, Document};
use crate::http::{self, HttpFetcher};
use crate::url_utils::{self, Site};

/// Conventional favicon path requested when the markup declares none.
pub const FALLBACK_PATH: &str = "/favicon.ico";

/// Absolute URL of the first declared icon, or empty.
#[must_use]
pub fn from_html(doc: &Document, site: Option<&Site>) -> String {
    dom::each(doc, "link[rel][href]")
        .filter(|link| dom::has_token(link, "rel", "icon"))
        .find_map(|link| dom::non_empty_attribute(&link, "href"))
        .map(|href| url_utils::absolutize(&href, site))
        .unwrap_or_default()
}

/// Request `<origin>/favicon.ico`.
///
/// Accepted on a 2xx answer whose content type is not HTML (many servers
/// answer missing files with a 200 error page). Any failure yields `None`.
pub async fn check(fetcher: &dyn HttpFetcher, site: &Site, timeout: Duration) -> Option<String> {
    let url = site.join(FALLBACK_PATH);

    let response = match http::bounded(timeout, fetcher.head(&url)).await {
        Ok(response) => response,
        Err(e) => {
            debug!(%url, error = %e, "favicon request failed");
            return None;
        }
    };

    (response.is_success() && !response.is_html()).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favicon(html: &str) -> String {
        from_html(&dom::parse(html), Site::parse("example.com").as_ref())
    }

    #[test]
    fn first_icon_link_wins_and_is_absolutized() {
        let html = r#"<head>
            <link rel="stylesheet" href="/style.css">
            <link rel="shortcut icon" href="/static/favicon.png">
            <link rel="icon" href="/other.ico">
        </head>"#;
        assert_eq!(favicon(html), "http://example.com/static/favicon.png");
    }

    #[test]
    fn apple_touch_icon_alone_is_not_a_favicon() {
        assert_eq!(favicon(r#"<link rel="apple-touch-icon" href="/a.png">"#), "");
    }

    #[test]
    fn absolute_href_is_kept() {
        assert_eq!(
            favicon(r#"<link rel="ICON" href="https://cdn.example.net/f.ico">"#),
            "https://cdn.example.net/f.ico"
        );
    }
}
