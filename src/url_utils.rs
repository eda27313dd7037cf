//! URL Utility Functions
//!
//! Normalizes the analyzed domain, resolves link targets against it and
//! answers the host/path questions the link classifier asks.

use url::{Host, Url};

/// Document extensions counted as file links.
const FILE_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip", "rar", "txt", "csv",
];

/// Href schemes that never denote a navigable link.
const NON_LINK_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// The site under analysis.
///
/// `origin` keeps scheme and port for probing; `host` is the comparison key
/// for internal/external classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// Origin URL with a `/` path, e.g. `http://example.com:8080/`.
    pub origin: Url,
    /// ASCII lower-case host without a leading `www.`.
    pub host: String,
}

impl Site {
    /// Parse the analyzed domain.
    ///
    /// Accepts a bare host (`example.com`), an IDN (`bücher.de`) or a full
    /// URL. Bare hosts default to `http://`. Returns `None` when no host can
    /// be recovered.
    #[must_use]
    pub fn parse(domain: &str) -> Option<Self> {
        let domain = domain.trim();
        if domain.is_empty() {
            return None;
        }

        let candidate = if domain.contains("://") {
            domain.to_string()
        } else {
            format!("http://{domain}")
        };

        let mut origin = Url::parse(&candidate).ok()?;
        if !matches!(origin.scheme(), "http" | "https") {
            return None;
        }
        let host = comparable_host(&origin)?;

        origin.set_path("/");
        origin.set_query(None);
        origin.set_fragment(None);

        Some(Self { origin, host })
    }

    /// Absolute URL for a root-relative path such as `/robots.txt`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        self.origin
            .join(path)
            .map_or_else(|_| format!("{}{}", self.origin, path.trim_start_matches('/')), |u| u.to_string())
    }

    /// Whether `url` points at this site.
    #[must_use]
    pub fn is_same_host(&self, url: &Url) -> bool {
        comparable_host(url).is_some_and(|h| h == self.host)
    }
}

/// Normalize a domain to its comparable host form.
///
/// Returns an empty string when the domain cannot be parsed.
#[must_use]
pub fn normalize_domain(domain: &str) -> String {
    Site::parse(domain).map(|s| s.host).unwrap_or_default()
}

/// Host of a parsed URL in comparable form (punycode, lower-case, no `www.`).
fn comparable_host(url: &Url) -> Option<String> {
    let host = match url.host()? {
        Host::Domain(d) => d.to_ascii_lowercase(),
        Host::Ipv4(ip) => ip.to_string(),
        Host::Ipv6(ip) => ip.to_string(),
    };
    let host = host.trim_end_matches('.');
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// A link target after resolution against the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Parsed absolute URL.
    Absolute(Url),
    /// A path that could not be made absolute (no usable site).
    BarePath(String),
    /// Anything else that could not be parsed, kept verbatim.
    Opaque(String),
}

impl Target {
    /// The URL string as reported in the link list (fragment removed).
    #[must_use]
    pub fn as_string(&self) -> String {
        match self {
            Self::Absolute(url) => {
                let mut url = url.clone();
                url.set_fragment(None);
                url.to_string()
            }
            Self::BarePath(s) | Self::Opaque(s) => strip_fragment(s).to_string(),
        }
    }

    /// Whether the target carries a query string.
    #[must_use]
    pub fn has_query(&self) -> bool {
        match self {
            Self::Absolute(url) => url.query().is_some(),
            Self::BarePath(s) | Self::Opaque(s) => strip_fragment(s).contains('?'),
        }
    }

    /// Path component, without query or fragment.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Absolute(url) => url.path(),
            Self::BarePath(s) | Self::Opaque(s) => {
                let s = strip_fragment(s);
                s.split('?').next().unwrap_or(s)
            }
        }
    }
}

fn strip_fragment(s: &str) -> &str {
    s.split('#').next().unwrap_or(s)
}

/// Whether an href denotes a link at all.
///
/// Empty, fragment-only and script/mail/phone/data hrefs do not.
#[must_use]
pub fn is_navigable_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    let lower = href.to_ascii_lowercase();
    !NON_LINK_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Resolve an href against the site.
///
/// Protocol-relative (`//host/x`) and relative (`about`, `../x`, `/x`) forms
/// are made absolute when a site is known.
#[must_use]
pub fn resolve_href(href: &str, site: Option<&Site>) -> Target {
    let href = href.trim();

    if let Ok(url) = Url::parse(href) {
        if url.has_host() || url.cannot_be_a_base() {
            return Target::Absolute(url);
        }
    }

    match site {
        Some(site) => match site.origin.join(href) {
            Ok(url) => Target::Absolute(url),
            Err(_) => Target::Opaque(href.to_string()),
        },
        None if href.starts_with("//") => {
            Url::parse(&format!("http:{href}")).map_or_else(|_| Target::Opaque(href.to_string()), Target::Absolute)
        }
        None => Target::BarePath(href.to_string()),
    }
}

/// Resolve an href to an absolute URL string, or return it trimmed.
#[must_use]
pub fn absolutize(href: &str, site: Option<&Site>) -> String {
    resolve_href(href, site).as_string()
}

/// Whether a path ends in a known downloadable document extension.
#[must_use]
pub fn is_file_path(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && FILE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_parse_normalizes_host() {
        let site = Site::parse("WWW.Example.com").expect("site");
        assert_eq!(site.host, "example.com");
        assert_eq!(site.origin.as_str(), "http://www.example.com/");

        let site = Site::parse("https://example.com:8443/some/page?q=1").expect("site");
        assert_eq!(site.host, "example.com");
        assert_eq!(site.origin.as_str(), "https://example.com:8443/");
    }

    #[test]
    fn site_parse_converts_idn_to_punycode() {
        assert_eq!(normalize_domain("bücher.de"), "xn--bcher-kva.de");
    }

    #[test]
    fn site_parse_rejects_garbage() {
        assert!(Site::parse("").is_none());
        assert!(Site::parse("   ").is_none());
        assert!(Site::parse("ftp://example.com").is_none());
    }

    #[test]
    fn resolve_handles_relative_forms() {
        let site = Site::parse("example.com").expect("site");
        assert_eq!(absolutize("/about", Some(&site)), "http://example.com/about");
        assert_eq!(absolutize("contact.html", Some(&site)), "http://example.com/contact.html");
        assert_eq!(absolutize("//cdn.example.org/x", Some(&site)), "http://cdn.example.org/x");
        assert_eq!(absolutize("https://other.com/#top", Some(&site)), "https://other.com/");
    }

    #[test]
    fn resolve_without_site_keeps_paths() {
        assert_eq!(resolve_href("/about", None), Target::BarePath("/about".into()));
        assert!(matches!(resolve_href("https://x.org/", None), Target::Absolute(_)));
    }

    #[test]
    fn navigable_href_filters_pseudo_links() {
        assert!(is_navigable_href("/page"));
        assert!(!is_navigable_href("#section"));
        assert!(!is_navigable_href("JavaScript:void(0)"));
        assert!(!is_navigable_href("mailto:me@example.com"));
        assert!(!is_navigable_href("  "));
    }

    #[test]
    fn file_path_detection() {
        assert!(is_file_path("/docs/report.PDF"));
        assert!(is_file_path("/a/b/data.csv"));
        assert!(!is_file_path("/index.html"));
        assert!(!is_file_path("/downloads/"));
        assert!(!is_file_path("/.zip"));
    }
}
