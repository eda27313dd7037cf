//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` giving the extractors a fixed vocabulary:
//! parse, iterate matches, read attributes and text. html5ever's tree
//! builder recovers from any malformed input, so none of these fail.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

use crate::patterns::{COMMENT, TAG};
use crate::text;

/// Elements whose content is never shown as page text.
const NON_TEXT_ELEMENTS: &str = "script, style, noscript, template";

/// Parse an HTML document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Each element matching `selector`, in document order.
///
/// `selector` must be a valid static CSS selector.
pub fn each<'a>(doc: &'a Document, selector: &str) -> impl Iterator<Item = Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect::<Vec<_>>()
        .into_iter()
}

/// Whether any element matches `selector`.
#[must_use]
pub fn exists(doc: &Document, selector: &str) -> bool {
    !doc.select(selector).nodes().is_empty()
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute value trimmed, or `None` when absent or blank.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whether a space-separated attribute (such as `rel`) carries `token`,
/// compared case-insensitively.
#[must_use]
pub fn has_token(sel: &Selection, attr: &str, token: &str) -> bool {
    get_attribute(sel, attr).is_some_and(|value| {
        value
            .split_ascii_whitespace()
            .any(|t| t.eq_ignore_ascii_case(token))
    })
}

/// Lower-case tag name of the first node.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Decoded descendant text with whitespace collapsed.
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    text::normalize_whitespace(&sel.text())
}

/// Human-readable text of the whole document, whitespace collapsed.
///
/// Works on a copy with non-text elements removed. The parser has already
/// decoded every character reference; serializing the copy escapes only
/// `&`, `<`, `>` and NBSP inside text, so only those are undone. Element
/// boundaries become spaces, so `<p>a</p><p>b</p>` reads as two words.
#[must_use]
pub fn visible_text(doc: &Document) -> String {
    let copy = Document::from(doc.html().to_string());
    copy.select(NON_TEXT_ELEMENTS).remove();

    let markup = copy.html();
    let without_comments = COMMENT.replace_all(&markup, " ");
    let without_tags = TAG.replace_all(&without_comments, " ");
    text::normalize_whitespace(&unescape_text(&without_tags))
}

/// Undo the escaping the serializer applies to text nodes. `&amp;` last.
fn unescape_text(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
