//! Error types for rs-seo-audit.
//!
//! Extraction never fails: malformed or empty HTML degrades to zero-valued
//! facts. The errors here cover rate-table authoring bugs and callers handing
//! the engine an incomplete fact set.

use crate::rate_table::{Category, RuleKind};

/// Error type for scoring and (de)serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The rate table is malformed or does not cover an observed value.
    #[error("rate table configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A fact set was supplied without one of its required buckets.
    #[error("fact set is missing the `{0}` bucket")]
    MissingFact(&'static str),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rate-table authoring errors.
///
/// These are reported distinctly from "page fails this check" so a broken
/// table never silently scores 0.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A category every table must define is absent.
    #[error("category `{0}` is missing from the rate table")]
    MissingCategory(Category),

    /// A category is defined more than once.
    #[error("category `{0}` is defined more than once")]
    DuplicateCategory(Category),

    /// A category was given a rule of the wrong kind.
    #[error("category `{category}` expects a {expected} rule, found {found}")]
    RuleKindMismatch {
        category: Category,
        expected: RuleKind,
        found: RuleKind,
    },

    /// Thresholds are not ordered or not finite.
    #[error("category `{category}` has invalid thresholds: {reason}")]
    InvalidThresholds {
        category: Category,
        reason: String,
    },

    /// A score or weight is negative or not finite.
    #[error("category `{category}` has an invalid score {value}")]
    InvalidScore { category: Category, value: f64 },

    /// A ranged rule has no bucket for the observed value.
    #[error("category `{category}` has no bucket covering value {value}")]
    Uncovered { category: Category, value: f64 },
}

/// Result type alias for scoring operations.
pub type Result<T> = std::result::Result<T, Error>;
