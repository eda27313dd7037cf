//! Heading outline.

use crate::dom::{self, Document};
use crate::facts::Headings;

/// Collect `h1`..`h6` texts per level in document order.
///
/// Headings whose text is empty after whitespace collapsing are skipped.
#[must_use]
pub fn extract(doc: &Document) -> Headings {
    dom::each(doc, "h1, h2, h3, h4, h5, h6").fold(Headings::default(), |mut headings, heading| {
        let text = dom::clean_text(&heading);
        if text.is_empty() {
            return headings;
        }
        if let Some(level) = dom::tag_name(&heading).and_then(|tag| headings.level_mut(&tag)) {
            level.push(text);
        }
        headings
    })
}
