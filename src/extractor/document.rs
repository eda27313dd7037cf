//! Document-level structure: doctype, language, asset counts, text/HTML
//! ratio, deprecated markup, apple icon and print stylesheet presence.

use std::collections::BTreeMap;

use crate::dom::{self, Document};
use crate::patterns::{COMMENT, DEPRECATED_TAG, DOCTYPE, MEDIA_PRINT, NON_TEXT_BLOCK};
use crate::text;

/// Everything the document extractor reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub doctype: String,
    pub lang: String,
    pub css_count: usize,
    pub js_count: usize,
    pub html_ratio: f64,
    pub apple_icon: bool,
    pub printable: bool,
    pub deprecated_tags: BTreeMap<String, usize>,
}

/// Known doctype declarations, matched by public identifier.
const DOCTYPE_NAMES: &[(&str, &str)] = &[
    ("-//W3C//DTD XHTML 1.1//EN", "XHTML 1.1"),
    ("-//W3C//DTD XHTML 1.0 STRICT//EN", "XHTML 1.0 Strict"),
    ("-//W3C//DTD XHTML 1.0 TRANSITIONAL//EN", "XHTML 1.0 Transitional"),
    ("-//W3C//DTD XHTML 1.0 FRAMESET//EN", "XHTML 1.0 Frameset"),
    ("-//W3C//DTD HTML 4.01 TRANSITIONAL//EN", "HTML 4.01 Transitional"),
    ("-//W3C//DTD HTML 4.01 FRAMESET//EN", "HTML 4.01 Frameset"),
    ("-//W3C//DTD HTML 4.01//EN", "HTML 4.01 Strict"),
];

#[must_use]
pub fn extract(doc: &Document, html: &str) -> DocumentInfo {
    DocumentInfo {
        doctype: doctype(html),
        lang: language(doc),
        css_count: dom::each(doc, "link[rel]")
            .filter(|link| dom::has_token(link, "rel", "stylesheet"))
            .filter(|link| dom::non_empty_attribute(link, "href").is_some())
            .count(),
        js_count: dom::each(doc, "script[src]")
            .filter(|script| dom::non_empty_attribute(script, "src").is_some())
            .count(),
        html_ratio: html_ratio(html),
        apple_icon: dom::each(doc, "link[rel]").any(|link| {
            dom::get_attribute(&link, "rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|t| t.to_ascii_lowercase().starts_with("apple-touch-icon"))
            })
        }),
        printable: printable(doc),
        deprecated_tags: deprecated_tags(html),
    }
}

/// Classified doctype, the raw declaration when unknown, or empty.
#[must_use]
pub fn doctype(html: &str) -> String {
    let Some(caps) = DOCTYPE.captures(html) else {
        return String::new();
    };
    let declaration = text::normalize_whitespace(&caps[1]);
    classify_doctype(&declaration)
}

/// Map a doctype declaration body (text after `<!DOCTYPE`) to a display name.
#[must_use]
pub fn classify_doctype(declaration: &str) -> String {
    let upper = declaration.to_ascii_uppercase();
    if upper == "HTML" || upper.starts_with("HTML SYSTEM \"ABOUT:LEGACY-COMPAT\"") {
        return "HTML 5".to_string();
    }
    DOCTYPE_NAMES
        .iter()
        .find(|(public_id, _)| upper.contains(public_id))
        .map_or_else(|| declaration.to_string(), |(_, name)| (*name).to_string())
}

/// Language declared on the root element.
fn language(doc: &Document) -> String {
    dom::each(doc, "html")
        .next()
        .and_then(|root| {
            dom::non_empty_attribute(&root, "lang").or_else(|| dom::non_empty_attribute(&root, "xml:lang"))
        })
        .unwrap_or_default()
}

/// Text bytes over markup bytes, as a rounded percentage.
///
/// Byte lengths are used on both sides; an empty document scores 0.
#[must_use]
pub fn html_ratio(html: &str) -> f64 {
    if html.is_empty() {
        return 0.0;
    }
    let text_len = text::strip_tags(html).len() as f64;
    (text_len / html.len() as f64 * 100.0).round()
}

/// Whether the page ships print styles.
fn printable(doc: &Document) -> bool {
    let print_media = dom::each(doc, "link[media], style[media]").any(|el| {
        dom::get_attribute(&el, "media").is_some_and(|media| media.to_ascii_lowercase().contains("print"))
    });
    print_media || dom::each(doc, "style").any(|style| MEDIA_PRINT.is_match(&style.text()))
}

/// Occurrences of deprecated presentational tags, keyed by lower-case name.
///
/// Tags written inside comments, scripts or styles are not markup and are
/// not counted.
#[must_use]
pub fn deprecated_tags(html: &str) -> BTreeMap<String, usize> {
    let without_comments = COMMENT.replace_all(html, " ");
    let markup = NON_TEXT_BLOCK.replace_all(&without_comments, " ");

    DEPRECATED_TAG
        .captures_iter(&markup)
        .map(|caps| caps[1].to_ascii_lowercase())
        .fold(BTreeMap::new(), |mut acc, tag| {
            *acc.entry(tag).or_insert(0) += 1;
            acc
        })
}
