//! Shared text primitives used by every extractor.
//!
//! These operate on raw strings and never fail: unterminated tags and
//! stray ampersands pass through unchanged. Entity decoding is left to the
//! HTML parser (see [`crate::dom::visible_text`]).

use crate::patterns::{COMMENT, TAG, WHITESPACE_NORMALIZE};

/// Length in characters (code points), not bytes.
///
/// Title and description lengths are scored by this measure.
#[must_use]
pub fn mb_len(s: &str) -> usize {
    s.chars().count()
}

/// Remove comments and tags, keeping the text between them.
///
/// Script and style bodies are kept, matching the classic `strip_tags`
/// contract the text/HTML ratio is defined against.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let without_comments = COMMENT.replace_all(html, "");
    TAG.replace_all(&without_comments, "").into_owned()
}

/// Collapse whitespace runs (including NBSP) to single spaces and trim.
#[must_use]
pub fn normalize_whitespace(s: &str) -> String {
    let replaced = s.replace('\u{a0}', " ");
    WHITESPACE_NORMALIZE.replace_all(replaced.trim(), " ").into_owned()
}

/// Shorten a domain for display by eliding its middle.
///
/// Domains at or under `max_len` characters are returned unchanged.
#[must_use]
pub fn crop_domain(domain: &str, max_len: usize, separator: &str) -> String {
    let len = mb_len(domain);
    if len <= max_len {
        return domain.to_string();
    }

    let keep = max_len.saturating_sub(mb_len(separator));
    let head = keep.div_ceil(2);
    let tail = keep - head;

    let start: String = domain.chars().take(head).collect();
    let end: String = domain.chars().skip(len - tail).collect();
    format!("{start}{separator}{end}")
}
