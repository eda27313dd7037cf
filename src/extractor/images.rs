//! Image alt-text coverage.

use crate::dom::{self, Document};

/// Alt coverage counters for every `<img>` in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCoverage {
    pub total: usize,
    pub with_alt: usize,
    /// `src` of each image without usable alt text, as written, in order.
    pub missing_alt: Vec<String>,
}

/// Scan each image once. An image has alt text iff `alt` is present and
/// non-blank; duplicates in `missing_alt` are kept.
#[must_use]
pub fn extract(doc: &Document) -> ImageCoverage {
    dom::each(doc, "img").fold(ImageCoverage::default(), |mut coverage, img| {
        coverage.total += 1;
        if dom::non_empty_attribute(&img, "alt").is_some() {
            coverage.with_alt += 1;
        } else {
            let src = dom::get_attribute(&img, "src").unwrap_or_default();
            coverage.missing_alt.push(src.trim().to_string());
        }
        coverage
    })
}
