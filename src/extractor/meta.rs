//! HTML Meta Tag Extraction
//!
//! Title, description, keywords, Open Graph properties, charset, viewport
//! and Dublin Core presence. Values are returned in full; persistence
//! limits are the caller's concern.

use crate::dom::{self, Document};
use crate::encoding;
use crate::ordered::OrderedMap;

/// Everything the meta extractor reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_properties: OrderedMap<String, String>,
    pub charset: String,
    pub viewport: bool,
    pub dublin_core: bool,
}

/// Examine the document head for meta information.
///
/// The first `<title>` and the first `description`/`keywords` meta tags win.
/// Open Graph properties are read from `property` (or `name`) attributes
/// starting with `og:`.
#[must_use]
pub fn extract(doc: &Document, html: &str) -> MetaTags {
    let mut result = MetaTags {
        title: extract_title(doc),
        charset: encoding::declared_charset(html).unwrap_or_default(),
        ..MetaTags::default()
    };

    let mut seen_description = false;
    let mut seen_keywords = false;

    for meta in dom::each(doc, "meta") {
        let name = dom::get_attribute(&meta, "name")
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let property = dom::get_attribute(&meta, "property")
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let content = dom::get_attribute(&meta, "content").unwrap_or_default();

        match name.as_str() {
            "description" if !seen_description => {
                seen_description = true;
                result.description = content.trim().to_string();
            }
            "keywords" if !seen_keywords => {
                seen_keywords = true;
                result.keywords = content.trim().to_string();
            }
            "viewport" => {
                result.viewport |= !content.trim().is_empty();
            }
            n if n.starts_with("dc.") || n.starts_with("dcterms.") => {
                result.dublin_core = true;
            }
            _ => {}
        }

        let og_key = if property.starts_with("og:") {
            Some(property)
        } else if name.starts_with("og:") {
            Some(name)
        } else {
            None
        };

        if let Some(key) = og_key {
            let value = content.trim();
            if !value.is_empty() {
                result.og_properties.insert_first(key, value.to_string());
            }
        }
    }

    if !result.dublin_core {
        result.dublin_core = dom::each(doc, "link[rel]")
            .any(|link| dom::has_token(&link, "rel", "schema.dc") || dom::has_token(&link, "rel", "schema.dcterms"));
    }

    result
}

/// First document title, preferring the one inside `<head>`.
fn extract_title(doc: &Document) -> String {
    dom::each(doc, "head > title")
        .chain(dom::each(doc, "title"))
        .next()
        .map(|title| dom::clean_text(&title))
        .unwrap_or_default()
}
