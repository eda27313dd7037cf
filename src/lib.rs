//! # rs-seo-audit
//!
//! On-page SEO signal extraction and scoring.
//!
//! This library turns a fetched HTML document and its domain into a typed
//! fact set (meta tags, document structure, links, images, headings,
//! optimization artifacts, analytics, markup validation, keyword cloud and
//! keyword consistency), then scores that fact set against a declarative
//! rate table into per-category points, advice tags and a 0–100 total.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_seo_audit::{analyze, score, AnalyzeOptions, RateTable};
//!
//! let html = r#"<!DOCTYPE html><html lang="en"><head>
//! <meta charset="utf-8"><title>Fresh Fish Market in London</title>
//! </head><body><h1>Fresh fish</h1><a href="/about">About</a></body></html>"#;
//!
//! let facts = analyze(html, "example.com", &AnalyzeOptions::default());
//! assert_eq!(facts.links.internal_count, 1);
//!
//! let breakdown = score(&facts, &RateTable::default())?;
//! assert!(breakdown.total > 0.0 && breakdown.total <= 100.0);
//! # Ok::<(), rs_seo_audit::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Pure extraction**: [`analyze`] never fails and never touches the network
//! - **Site checks**: [`analyze_online`] adds robots.txt, sitemap, gzip, favicon
//!   fallback and markup validation through pluggable collaborators
//! - **Declarative scoring**: [`RateTable`] is plain, validated data; [`score`]
//!   is a pure function of facts and table
//! - **Stable JSON**: facts and scores serialize with fixed camelCase keys

mod analyze;
mod error;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Signal extractors, one per fact bucket.
pub mod extractor;

/// The fact set produced by an analysis run.
pub mod facts;

/// Keyword cloud, stop words and consistency matrix.
pub mod keywords;

/// Insertion-ordered map with JSON-object serialization.
pub mod ordered;

/// Rate table: categories, rules and the built-in defaults.
pub mod rate_table;

/// Rule evaluation into a score breakdown.
pub mod scoring;

/// Text primitives: lengths, entities, tag stripping, domain cropping.
pub mod text;

/// URL utilities for domain normalization and link resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTTP collaborator used by the site checks.
pub mod http;

/// Markup validator collaborator and summary.
pub mod w3c;

// Public API - re-exports
pub use error::{ConfigError, Error, Result};
pub use facts::FactSet;
pub use http::{FetchError, HttpFetcher, HttpResponse};
pub use options::AnalyzeOptions;
pub use rate_table::{Category, RateTable, Rule};
pub use scoring::{CategoryScore, ScoreBreakdown};
pub use w3c::{W3cSummary, W3cValidator};

#[cfg(feature = "http")]
pub use http::ReqwestFetcher;

/// Extracts every offline fact from an HTML document.
///
/// Network-backed facts take their documented absent values: no favicon
/// fallback, `robotsTxt` and `gzip` false, no sitemaps and a default W3C
/// summary.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `domain` - The analyzed domain (`example.com`, an IDN or a full URL)
/// * `options` - Keyword and request configuration
///
/// # Example
///
/// ```rust
/// use rs_seo_audit::{analyze, AnalyzeOptions};
///
/// let facts = analyze("<img src=a.png><img src=b.png alt=B>", "example.com", &AnalyzeOptions::default());
/// assert_eq!(facts.content.total_images, 2);
/// assert_eq!(facts.content.images_missing_alt, vec!["a.png"]);
/// ```
#[must_use]
pub fn analyze(html: &str, domain: &str, options: &AnalyzeOptions) -> FactSet {
    analyze::analyze(html, domain, options)
}

/// Extracts facts from HTML bytes with automatic encoding detection.
///
/// # Character Encoding
///
/// The function detects encoding from:
/// - `<meta charset="...">`
/// - `<meta http-equiv="Content-Type" content="...; charset=...">`
/// - Defaults to UTF-8 if no declaration found
///
/// Invalid characters are replaced with � (Unicode replacement character)
/// rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_seo_audit::{analyze_bytes, AnalyzeOptions};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// let facts = analyze_bytes(html, "example.com", &AnalyzeOptions::default());
/// assert_eq!(facts.meta.title, "Café");
/// ```
#[must_use]
pub fn analyze_bytes(html: &[u8], domain: &str, options: &AnalyzeOptions) -> FactSet {
    let html_str = encoding::transcode_to_utf8(html);
    analyze(&html_str, domain, options)
}

/// Extracts every fact, probing the site and validator concurrently.
///
/// The favicon fallback, the robots.txt/sitemap/gzip checks and the markup
/// validation each run under `options.request_timeout`. A failed or slow request
/// leaves its fact absent; it never fails the analysis. With no validator
/// the W3C summary keeps its default.
pub async fn analyze_online(
    html: &str,
    domain: &str,
    options: &AnalyzeOptions,
    fetcher: &dyn HttpFetcher,
    validator: Option<&dyn W3cValidator>,
) -> FactSet {
    analyze::analyze_online(html, domain, options, fetcher, validator).await
}

/// Scores a fact set against a rate table.
///
/// # Errors
///
/// Returns [`Error::Configuration`] when a ranged rule does not cover the
/// observed value.
///
/// # Example
///
/// ```rust
/// use rs_seo_audit::{score, Category, FactSet, RateTable};
///
/// let breakdown = score(&FactSet::default(), &RateTable::default())?;
/// assert_eq!(breakdown.get(Category::NoFlash).map(|c| c.advice.as_str()), Some("ok"));
/// assert_eq!(breakdown.get(Category::Title).map(|c| c.advice.as_str()), Some("error"));
/// # Ok::<(), rs_seo_audit::Error>(())
/// ```
pub fn score(facts: &FactSet, table: &RateTable) -> Result<ScoreBreakdown> {
    scoring::score(facts, table)
}
