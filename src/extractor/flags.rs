//! Markup smells: Flash, iframes, nested tables, inline CSS and exposed
//! email addresses.

use crate::dom::{self, Document};
use crate::patterns::{EMAIL, FLASH};

/// Markup-level boolean signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupFlags {
    pub flash: bool,
    pub iframe: bool,
    pub nested_tables: bool,
    pub inline_css: bool,
    pub plain_email: bool,
}

/// `visible_text` is the document's [`dom::visible_text`]; email addresses
/// only count when a reader can see them.
#[must_use]
pub fn extract(doc: &Document, html: &str, visible_text: &str) -> MarkupFlags {
    MarkupFlags {
        flash: FLASH.is_match(html),
        iframe: dom::exists(doc, "iframe"),
        nested_tables: dom::exists(doc, "table table"),
        inline_css: dom::exists(doc, "[style]"),
        plain_email: EMAIL.is_match(visible_text),
    }
}
