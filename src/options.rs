//! Configuration options for an analysis run.
//!
//! The `AnalyzeOptions` struct controls keyword analysis and probing. The
//! rate table is not part of it: it is passed to [`crate::score`] on its own
//! so one table can be shared across many analyses.

use std::time::Duration;

use crate::http::DEFAULT_TIMEOUT;

/// Configuration options for [`crate::analyze`] and its variants.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_seo_audit::AnalyzeOptions;
///
/// // Use defaults
/// let options = AnalyzeOptions::default();
/// assert_eq!(options.consistency_count, 5);
///
/// // Customize specific fields
/// let options = AnalyzeOptions {
///     language: Some("de".to_string()),
///     cloud_size: 20,
///     ..AnalyzeOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Stop-word language override (BCP 47 tag or primary subtag).
    ///
    /// When `None`, the primary subtag of `<html lang>` is used, falling
    /// back to English.
    ///
    /// Default: `None`
    pub language: Option<String>,

    /// Number of top cloud words cross-referenced in the consistency matrix.
    ///
    /// Default: `5`
    pub consistency_count: usize,

    /// Number of words kept in the keyword cloud.
    ///
    /// Default: `10`
    pub cloud_size: usize,

    /// Minimum token length, in characters, for a cloud word.
    ///
    /// Default: `3`
    pub min_word_length: usize,

    /// Upper bound for each auxiliary HTTP request and the validator call.
    ///
    /// Default: 10 seconds
    pub request_timeout: Duration,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            language: None,
            consistency_count: 5,
            cloud_size: 10,
            min_word_length: 3,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AnalyzeOptions {
    /// Stop-word language for a document declaring `document_lang`.
    #[must_use]
    pub fn stop_word_language(&self, document_lang: &str) -> String {
        let declared = self.language.as_deref().unwrap_or(document_lang);
        let primary = crate::keywords::stopwords::primary_subtag(declared);
        if primary.is_empty() {
            "en".to_string()
        } else {
            primary
        }
    }
}
