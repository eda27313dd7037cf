//! Charset declaration lookup and transcoding.
//!
//! The declared charset is both an audited fact (`document.charset`) and the
//! hint used to transcode raw bytes to UTF-8 before analysis.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Charset declared by the document, as written.
///
/// Looks at `<meta charset>` first, then the `http-equiv` content-type
/// declaration. The content-type form also satisfies the first pattern
/// (`charset=` inside `content`), so both are reported identically.
#[must_use]
pub fn declared_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .or_else(|| CONTENT_TYPE_CHARSET_RE.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Detect character encoding from HTML bytes.
///
/// Only examines the first 1024 bytes; defaults to UTF-8 when nothing
/// usable is declared.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    declared_charset(&head_str)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```rust
/// use rs_seo_audit::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_charset_from_meta_charset() {
        assert_eq!(declared_charset(r#"<meta charset="UTF-8">"#).as_deref(), Some("UTF-8"));
        assert_eq!(declared_charset("<meta charset=utf-8/>").as_deref(), Some("utf-8"));
    }

    #[test]
    fn declared_charset_from_http_equiv() {
        let html = r#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#;
        assert_eq!(declared_charset(html).as_deref(), Some("windows-1251"));
    }

    #[test]
    fn declared_charset_absent() {
        assert_eq!(declared_charset("<html><head></head></html>"), None);
    }

    #[test]
    fn detect_encoding_falls_back_to_utf8() {
        assert_eq!(detect_encoding(b"<meta charset=\"not-a-charset\">"), UTF_8);
        assert_eq!(detect_encoding(b""), UTF_8);
    }

    #[test]
    fn transcode_windows_1251() {
        let html = b"<meta charset=\"windows-1251\"><p>\xCF\xF0\xE8\xE2\xE5\xF2</p>";
        assert!(transcode_to_utf8(html).contains("Привет"));
    }
}
