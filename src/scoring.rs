//! Rule evaluation: fact set + rate table → per-category points and advice.
//!
//! Evaluation is a single synchronous pass over the table in table order.
//! It reads nothing but its two arguments, so repeated calls with the same
//! inputs return identical breakdowns.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ConfigError, Result};
use crate::facts::FactSet;
use crate::keywords::Consistency;
use crate::ordered::OrderedMap;
use crate::rate_table::{Category, Ceiling, ConsistencyWeights, Floor, RateTable, Rule, Tiered, W3cRule};
use crate::text;

/// Upper bound of the aggregate score.
pub const MAX_TOTAL: f64 = 100.0;

/// Advice for a passing boolean or consistency check.
pub const ADVICE_OK: &str = "ok";

/// Advice for a failing boolean or consistency check.
pub const ADVICE_ERROR: &str = "error";

/// Points and advice tag for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub points: f64,
    pub advice: String,
}

impl CategoryScore {
    fn new(points: f64, advice: &str) -> Self {
        Self {
            points,
            advice: advice.to_string(),
        }
    }

    fn pass_fail(passed: bool, points: f64) -> Self {
        if passed {
            Self::new(points, ADVICE_OK)
        } else {
            Self::new(0.0, ADVICE_ERROR)
        }
    }
}

/// Scores for every category in table order, and the clamped total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub categories: OrderedMap<Category, CategoryScore>,
    /// Sum of category points rounded to 2 decimals, within `0..=100`.
    pub total: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.get(&category)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Score a fact set against a rate table.
///
/// # Errors
///
/// [`crate::Error::Configuration`] with [`ConfigError::Uncovered`] when a
/// ranged rule has no bucket for the observed value (for example a value
/// below an `Exact` floor, or NaN).
pub fn score(facts: &FactSet, table: &RateTable) -> Result<ScoreBreakdown> {
    let mut categories = OrderedMap::new();

    for (category, rule) in table.iter() {
        let result = evaluate(category, rule, facts)?;
        trace!(%category, points = result.points, advice = %result.advice, "category scored");
        categories.insert_first(category, result);
    }

    let sum: f64 = categories.values().map(|c| c.points).sum();
    let total = round2(sum).clamp(0.0, MAX_TOTAL);

    Ok(ScoreBreakdown { categories, total })
}

fn evaluate(category: Category, rule: &Rule, facts: &FactSet) -> std::result::Result<CategoryScore, ConfigError> {
    match rule {
        Rule::Boolean { score } => Ok(CategoryScore::pass_fail(predicate(category, facts), *score)),
        Rule::Tiered(tiered) => evaluate_tiered(category, tiered, ranged_value(category, facts)),
        Rule::Ceiling(ceiling) => evaluate_ceiling(category, ceiling, ranged_value(category, facts)),
        Rule::W3c(w3c) => Ok(evaluate_w3c(w3c, facts.w3c.errors, facts.w3c.warnings)),
        Rule::WordConsistency(weights) => Ok(evaluate_consistency(weights, facts)),
    }
}

/// Named boolean predicate of a category.
///
/// Categories without a boolean meaning never reach this through a
/// validated table and evaluate to `false`.
#[must_use]
pub fn predicate(category: Category, facts: &FactSet) -> bool {
    let FactSet {
        meta,
        document,
        content,
        links,
        flags,
        optimization,
        analytics,
        ..
    } = facts;

    match category {
        Category::NoFlash => !flags.flash,
        Category::NoIframe => !flags.iframe,
        Category::IssetHeadings => content.has_headings,
        Category::NoNestedTables => !flags.nested_tables,
        Category::NoInlineCss => !flags.inline_css,
        Category::NoEmail => !flags.plain_email,
        Category::IsFriendlyUrl => links.friendly,
        Category::NoUnderscore => !links.has_underscore,
        Category::IssetInternalLinks => links.internal_count > 0,
        Category::IssetFavicon => !document.favicon.is_empty(),
        Category::Doctype => !document.doctype.is_empty(),
        Category::Lang => !document.lang.is_empty(),
        Category::Charset => !document.charset.is_empty(),
        Category::Viewport => flags.viewport,
        Category::DublinCore => flags.dublin_core,
        Category::AppleIcon => flags.apple_icon,
        Category::Printable => flags.printable,
        Category::RobotsTxt => flags.robots_txt,
        Category::Sitemap => !optimization.sitemap_urls.is_empty(),
        Category::Gzip => flags.gzip,
        Category::ImgHasAlt => content.total_images == content.total_images_with_alt,
        Category::OgMetaProperties => !meta.og_properties.is_empty(),
        Category::NoDeprecated => document.deprecated_tags.is_empty(),
        Category::HasAnalytics => !analytics.is_empty(),
        Category::Title
        | Category::Description
        | Category::HtmlRatio
        | Category::CssCount
        | Category::JsCount
        | Category::W3c
        | Category::WordConsistency => false,
    }
}

/// Numeric input of a ranged category. Lengths are in characters.
#[must_use]
pub fn ranged_value(category: Category, facts: &FactSet) -> f64 {
    match category {
        Category::Title => text::mb_len(&facts.meta.title) as f64,
        Category::Description => text::mb_len(&facts.meta.description) as f64,
        Category::HtmlRatio => facts.document.html_ratio,
        Category::CssCount => facts.document.css_count as f64,
        Category::JsCount => facts.document.js_count as f64,
        _ => 0.0,
    }
}

fn evaluate_tiered(category: Category, rule: &Tiered, value: f64) -> std::result::Result<CategoryScore, ConfigError> {
    let in_floor = match rule.floor {
        Floor::Exact => (value - rule.bad).abs() < f64::EPSILON,
        Floor::Below => value < rule.bad,
    };
    let above_floor = match rule.floor {
        Floor::Exact => value > rule.bad,
        Floor::Below => value >= rule.bad,
    };

    let award = if in_floor {
        &rule.error
    } else if above_floor && value < rule.good {
        &rule.warning
    } else if value >= rule.good && value <= rule.best {
        &rule.ok
    } else if value > rule.best {
        &rule.over
    } else {
        return Err(ConfigError::Uncovered { category, value });
    };

    Ok(CategoryScore::new(award.score, &award.advice))
}

fn evaluate_ceiling(category: Category, rule: &Ceiling, value: f64) -> std::result::Result<CategoryScore, ConfigError> {
    let award = if value <= rule.max {
        &rule.ok
    } else if value > rule.max {
        &rule.error
    } else {
        return Err(ConfigError::Uncovered { category, value });
    };
    Ok(CategoryScore::new(award.score, &award.advice))
}

fn evaluate_w3c(rule: &W3cRule, errors: usize, warnings: usize) -> CategoryScore {
    let issues = errors + warnings;
    let award = if errors == 0 && warnings < rule.warn_ok {
        &rule.clean
    } else if issues < rule.low {
        &rule.few
    } else if issues < rule.medium {
        &rule.some
    } else if issues < rule.high {
        &rule.many
    } else {
        &rule.failing
    };
    CategoryScore::new(award.score, &award.advice)
}

fn evaluate_consistency(weights: &ConsistencyWeights, facts: &FactSet) -> CategoryScore {
    let rows: Vec<_> = facts.consistency_matrix.values().collect();
    let count = |flag: fn(&Consistency) -> bool| rows.iter().filter(|row| flag(row)).count() as f64;

    let points = weights.keywords * count(|r| r.keywords)
        + weights.description * count(|r| r.description)
        + weights.title * count(|r| r.title)
        + weights.headings * count(|r| r.headings);

    let advice = if points > 0.0 { ADVICE_OK } else { ADVICE_ERROR };
    CategoryScore::new(points, advice)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
