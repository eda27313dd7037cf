//! Signal extractors.
//!
//! Each extractor turns the parsed document (and, where needed, the raw
//! markup or the analyzed site) into one fact bucket. None depends on
//! another's output, and none fails: malformed or empty input produces
//! zero-valued buckets.
//!
//! # Module Structure
//!
//! - `meta`: title, description, keywords, Open Graph, charset, viewport, Dublin Core
//! - `document`: doctype, language, asset counts, text/HTML ratio, deprecated tags
//! - `headings`: `h1`..`h6` outline
//! - `images`: alt-text coverage
//! - `links`: link classification and counters
//! - `flags`: Flash, iframes, nested tables, inline CSS, plain email
//! - `analytics`: analytics provider detection
//! - `favicon`: declared icon, plus the `/favicon.ico` request
//! - `optimization`: robots.txt, sitemap and gzip checks
//!
//! Only `favicon::check` and `optimization::check` touch the network.
//!
//! # Usage
//!
//! ```rust
//! use rs_seo_audit::dom;
//! use rs_seo_audit::extractor::{images, links};
//! use rs_seo_audit::url_utils::Site;
//!
//! let html = r#"<a href="/about">About</a><img src="logo.png">"#;
//! let doc = dom::parse(html);
//! let site = Site::parse("example.com");
//!
//! let links = links::extract(&doc, site.as_ref());
//! assert_eq!(links.internal_count, 1);
//! assert_eq!(images::extract(&doc).missing_alt, vec!["logo.png"]);
//! ```

pub mod analytics;
pub mod document;
pub mod favicon;
pub mod flags;
pub mod headings;
pub mod images;
pub mod links;
pub mod meta;
pub mod optimization;

pub use analytics::AnalyticsProvider;
pub use document::DocumentInfo;
pub use flags::MarkupFlags;
pub use images::ImageCoverage;
pub use meta::MetaTags;
pub use optimization::OptimizationReport;
