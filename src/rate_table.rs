//! Declarative scoring configuration.
//!
//! A [`RateTable`] maps every [`Category`] to exactly one [`Rule`]. Tables
//! are immutable values: build one in code with [`RateTable::new`], load one
//! with [`RateTable::from_json`], or take the built-in [`RateTable::default`].
//! All three paths validate the same way, so a table that exists is
//! well-formed.
//!
//! # Example
//!
//! ```rust
//! use rs_seo_audit::rate_table::{Category, RateTable, Rule};
//!
//! let table = RateTable::default();
//! assert_eq!(table.rule(Category::Gzip), Some(&Rule::Boolean { score: 4.0 }));
//! assert_eq!(table.max_total(), 98.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::ordered::OrderedMap;

/// A scored category. Serialized with its camelCase key (`noFlash`,
/// `htmlRatio`, `wordConsistency`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    NoFlash,
    NoIframe,
    IssetHeadings,
    NoNestedTables,
    NoInlineCss,
    NoEmail,
    IsFriendlyUrl,
    NoUnderscore,
    IssetInternalLinks,
    IssetFavicon,
    Doctype,
    Lang,
    Charset,
    Viewport,
    DublinCore,
    AppleIcon,
    Printable,
    RobotsTxt,
    Sitemap,
    Gzip,
    ImgHasAlt,
    OgMetaProperties,
    NoDeprecated,
    HasAnalytics,
    Title,
    Description,
    HtmlRatio,
    CssCount,
    JsCount,
    W3c,
    WordConsistency,
}

impl Category {
    /// Every category, in default table order.
    pub const ALL: [Self; 31] = [
        Self::NoFlash,
        Self::NoIframe,
        Self::IssetHeadings,
        Self::NoNestedTables,
        Self::NoInlineCss,
        Self::NoEmail,
        Self::IsFriendlyUrl,
        Self::NoUnderscore,
        Self::IssetInternalLinks,
        Self::IssetFavicon,
        Self::Doctype,
        Self::Lang,
        Self::Charset,
        Self::Viewport,
        Self::DublinCore,
        Self::AppleIcon,
        Self::Printable,
        Self::RobotsTxt,
        Self::Sitemap,
        Self::Gzip,
        Self::ImgHasAlt,
        Self::OgMetaProperties,
        Self::NoDeprecated,
        Self::HasAnalytics,
        Self::Title,
        Self::Description,
        Self::HtmlRatio,
        Self::CssCount,
        Self::JsCount,
        Self::W3c,
        Self::WordConsistency,
    ];

    /// The serialized key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NoFlash => "noFlash",
            Self::NoIframe => "noIframe",
            Self::IssetHeadings => "issetHeadings",
            Self::NoNestedTables => "noNestedTables",
            Self::NoInlineCss => "noInlineCss",
            Self::NoEmail => "noEmail",
            Self::IsFriendlyUrl => "isFriendlyUrl",
            Self::NoUnderscore => "noUnderscore",
            Self::IssetInternalLinks => "issetInternalLinks",
            Self::IssetFavicon => "issetFavicon",
            Self::Doctype => "doctype",
            Self::Lang => "lang",
            Self::Charset => "charset",
            Self::Viewport => "viewport",
            Self::DublinCore => "dublinCore",
            Self::AppleIcon => "appleIcon",
            Self::Printable => "printable",
            Self::RobotsTxt => "robotsTxt",
            Self::Sitemap => "sitemap",
            Self::Gzip => "gzip",
            Self::ImgHasAlt => "imgHasAlt",
            Self::OgMetaProperties => "ogMetaProperties",
            Self::NoDeprecated => "noDeprecated",
            Self::HasAnalytics => "hasAnalytics",
            Self::Title => "title",
            Self::Description => "description",
            Self::HtmlRatio => "htmlRatio",
            Self::CssCount => "cssCount",
            Self::JsCount => "jsCount",
            Self::W3c => "w3c",
            Self::WordConsistency => "wordConsistency",
        }
    }

    /// The rule kind this category is evaluated with.
    #[must_use]
    pub const fn expected_kind(self) -> RuleKind {
        match self {
            Self::Title | Self::Description | Self::HtmlRatio | Self::CssCount | Self::JsCount => RuleKind::Ranged,
            Self::W3c => RuleKind::W3c,
            Self::WordConsistency => RuleKind::WordConsistency,
            _ => RuleKind::Boolean,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Coarse rule family, used to check a rule fits its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Boolean,
    Ranged,
    W3c,
    WordConsistency,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Boolean => "boolean",
            Self::Ranged => "ranged",
            Self::W3c => "w3c",
            Self::WordConsistency => "word_consistency",
        })
    }
}

/// Points and advice tag awarded by a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub score: f64,
    pub advice: String,
}

impl Award {
    #[must_use]
    pub fn new(score: f64, advice: &str) -> Self {
        Self {
            score,
            advice: advice.to_string(),
        }
    }
}

/// How the lowest tier of a [`Tiered`] rule is matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Floor {
    /// `value == bad`; values below `bad` are not covered.
    #[default]
    Exact,
    /// `value < bad`; the warning tier then starts at `bad` inclusive.
    Below,
}

/// Four-bucket ranged rule over `bad ≤ good ≤ best`.
///
/// | bucket  | `Exact` floor         | `Below` floor          |
/// |---------|-----------------------|------------------------|
/// | error   | `v == bad`            | `v < bad`              |
/// | warning | `bad < v < good`      | `bad ≤ v < good`       |
/// | ok      | `good ≤ v ≤ best`     | `good ≤ v ≤ best`      |
/// | over    | `v > best`            | `v > best`             |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tiered {
    pub bad: f64,
    pub good: f64,
    pub best: f64,
    #[serde(default)]
    pub floor: Floor,
    pub error: Award,
    pub warning: Award,
    pub ok: Award,
    pub over: Award,
}

/// Two-bucket ranged rule: `v ≤ max` is ok, anything above is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ceiling {
    pub max: f64,
    pub ok: Award,
    pub error: Award,
}

/// Validator-summary rule. Buckets are checked in field order, first match wins:
/// `clean` (no errors, warnings below `warn_ok`), then total issues below
/// `low`, `medium` and `high`, then `failing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct W3cRule {
    pub warn_ok: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub clean: Award,
    pub few: Award,
    pub some: Award,
    pub many: Award,
    pub failing: Award,
}

/// Per-field weights of the keyword consistency rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyWeights {
    pub keywords: f64,
    pub description: f64,
    pub title: f64,
    pub headings: f64,
}

/// How one category is scored. Tagged by `"kind"` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Fixed points when the category's predicate holds.
    Boolean { score: f64 },
    Tiered(Tiered),
    Ceiling(Ceiling),
    W3c(W3cRule),
    WordConsistency(ConsistencyWeights),
}

impl Rule {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Boolean { .. } => RuleKind::Boolean,
            Self::Tiered(_) | Self::Ceiling(_) => RuleKind::Ranged,
            Self::W3c(_) => RuleKind::W3c,
            Self::WordConsistency(_) => RuleKind::WordConsistency,
        }
    }

    /// Highest points this rule can award, given at most `consistency_words`
    /// words per consistency field.
    #[must_use]
    pub fn max_points(&self, consistency_words: usize) -> f64 {
        match self {
            Self::Boolean { score } => *score,
            Self::Tiered(t) => [&t.error, &t.warning, &t.ok, &t.over].iter().map(|a| a.score).fold(0.0, f64::max),
            Self::Ceiling(c) => c.ok.score.max(c.error.score),
            Self::W3c(w) => [&w.clean, &w.few, &w.some, &w.many, &w.failing]
                .iter()
                .map(|a| a.score)
                .fold(0.0, f64::max),
            Self::WordConsistency(w) => (w.keywords + w.description + w.title + w.headings) * consistency_words as f64,
        }
    }

    fn validate(&self, category: Category) -> std::result::Result<(), ConfigError> {
        let found = self.kind();
        let expected = category.expected_kind();
        if found != expected {
            return Err(ConfigError::RuleKindMismatch {
                category,
                expected,
                found,
            });
        }

        let scores: Vec<f64> = match self {
            Self::Boolean { score } => vec![*score],
            Self::Tiered(t) => {
                if ![t.bad, t.good, t.best].iter().all(|v| v.is_finite()) {
                    return Err(invalid_thresholds(category, "thresholds must be finite"));
                }
                if !(t.bad <= t.good && t.good <= t.best) {
                    return Err(invalid_thresholds(category, "expected bad <= good <= best"));
                }
                vec![t.error.score, t.warning.score, t.ok.score, t.over.score]
            }
            Self::Ceiling(c) => {
                if !c.max.is_finite() {
                    return Err(invalid_thresholds(category, "ceiling must be finite"));
                }
                vec![c.ok.score, c.error.score]
            }
            Self::W3c(w) => {
                if !(w.low <= w.medium && w.medium <= w.high) {
                    return Err(invalid_thresholds(category, "expected low <= medium <= high"));
                }
                vec![w.clean.score, w.few.score, w.some.score, w.many.score, w.failing.score]
            }
            Self::WordConsistency(w) => vec![w.keywords, w.description, w.title, w.headings],
        };

        match scores.into_iter().find(|s| !s.is_finite() || *s < 0.0) {
            Some(value) => Err(ConfigError::InvalidScore { category, value }),
            None => Ok(()),
        }
    }
}

fn invalid_thresholds(category: Category, reason: &str) -> ConfigError {
    ConfigError::InvalidThresholds {
        category,
        reason: reason.to_string(),
    }
}

/// A validated rate table: every category exactly once, in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderedMap<Category, Rule>", into = "OrderedMap<Category, Rule>")]
pub struct RateTable {
    rules: OrderedMap<Category, Rule>,
}

impl RateTable {
    /// Validate and build a table. Entry order is kept as table order.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Category, Rule)>,
    {
        Ok(Self::validated(entries)?)
    }

    fn validated<I>(entries: I) -> std::result::Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Category, Rule)>,
    {
        let mut rules = OrderedMap::new();
        for (category, rule) in entries {
            rule.validate(category)?;
            if !rules.insert_first(category, rule) {
                return Err(ConfigError::DuplicateCategory(category));
            }
        }

        if let Some(missing) = Category::ALL.into_iter().find(|c| !rules.contains_key(c)) {
            return Err(ConfigError::MissingCategory(missing));
        }

        Ok(Self { rules })
    }

    /// Parse and validate a JSON table.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: OrderedMap<Category, Rule> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rules in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Rule)> {
        self.rules.iter().map(|(c, r)| (*c, r))
    }

    #[must_use]
    pub fn rule(&self, category: Category) -> Option<&Rule> {
        self.rules.get(&category)
    }

    /// Sum of every rule's maximum, assuming the default five consistency words.
    #[must_use]
    pub fn max_total(&self) -> f64 {
        self.rules.values().map(|r| r.max_points(DEFAULT_CONSISTENCY_WORDS)).sum()
    }
}

/// Consistency matrix size assumed by [`RateTable::max_total`].
const DEFAULT_CONSISTENCY_WORDS: usize = 5;

impl TryFrom<OrderedMap<Category, Rule>> for RateTable {
    type Error = ConfigError;

    fn try_from(entries: OrderedMap<Category, Rule>) -> std::result::Result<Self, Self::Error> {
        Self::validated(entries)
    }
}

impl From<RateTable> for OrderedMap<Category, Rule> {
    fn from(table: RateTable) -> Self {
        table.rules
    }
}

impl Default for RateTable {
    /// The built-in table. Maximum attainable total is 98.
    fn default() -> Self {
        let boolean = |category, score| (category, Rule::Boolean { score });
        let tiered = |category, bad, good, best, scores: [f64; 4]| {
            (
                category,
                Rule::Tiered(Tiered {
                    bad,
                    good,
                    best,
                    floor: Floor::Exact,
                    error: Award::new(scores[0], "error"),
                    warning: Award::new(scores[1], "warning"),
                    ok: Award::new(scores[2], "ok"),
                    over: Award::new(scores[3], "warning"),
                }),
            )
        };
        let ceiling = |category, max| {
            (
                category,
                Rule::Ceiling(Ceiling {
                    max,
                    ok: Award::new(3.0, "ok"),
                    error: Award::new(0.0, "error"),
                }),
            )
        };

        let rules = [
            boolean(Category::NoFlash, 2.0),
            boolean(Category::NoIframe, 2.0),
            boolean(Category::IssetHeadings, 4.0),
            boolean(Category::NoNestedTables, 2.0),
            boolean(Category::NoInlineCss, 2.0),
            boolean(Category::NoEmail, 1.0),
            boolean(Category::IsFriendlyUrl, 3.0),
            boolean(Category::NoUnderscore, 2.0),
            boolean(Category::IssetInternalLinks, 3.0),
            boolean(Category::IssetFavicon, 2.0),
            boolean(Category::Doctype, 2.0),
            boolean(Category::Lang, 2.0),
            boolean(Category::Charset, 2.0),
            boolean(Category::Viewport, 4.0),
            boolean(Category::DublinCore, 1.0),
            boolean(Category::AppleIcon, 1.0),
            boolean(Category::Printable, 1.0),
            boolean(Category::RobotsTxt, 3.0),
            boolean(Category::Sitemap, 3.0),
            boolean(Category::Gzip, 4.0),
            boolean(Category::ImgHasAlt, 4.0),
            boolean(Category::OgMetaProperties, 3.0),
            boolean(Category::NoDeprecated, 2.0),
            boolean(Category::HasAnalytics, 2.0),
            tiered(Category::Title, 0.0, 10.0, 70.0, [0.0, 3.0, 6.0, 1.0]),
            tiered(Category::Description, 0.0, 70.0, 160.0, [0.0, 3.0, 6.0, 1.0]),
            (
                Category::HtmlRatio,
                Rule::Tiered(Tiered {
                    bad: 10.0,
                    good: 25.0,
                    best: 70.0,
                    floor: Floor::Below,
                    error: Award::new(0.0, "error less_than"),
                    warning: Award::new(3.0, "warning"),
                    ok: Award::new(6.0, "success ideal_ratio"),
                    over: Award::new(2.0, "warning"),
                }),
            ),
            ceiling(Category::CssCount, 4.0),
            ceiling(Category::JsCount, 6.0),
            (
                Category::W3c,
                Rule::W3c(W3cRule {
                    warn_ok: 10,
                    low: 10,
                    medium: 25,
                    high: 50,
                    clean: Award::new(7.0, "ok"),
                    few: Award::new(5.0, "ok"),
                    some: Award::new(3.0, "warning"),
                    many: Award::new(1.0, "warning"),
                    failing: Award::new(0.0, "error"),
                }),
            ),
            (
                Category::WordConsistency,
                Rule::WordConsistency(ConsistencyWeights {
                    keywords: 0.5,
                    description: 0.5,
                    title: 0.5,
                    headings: 0.5,
                }),
            ),
        ];

        Self {
            rules: rules.into_iter().collect(),
        }
    }
}
