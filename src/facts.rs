//! The typed fact set produced by one analysis run.
//!
//! Every bucket is complete on construction: an extractor that finds nothing
//! returns empty strings, zero counts and empty collections, never a mix of
//! present and absent fields. Field names serialize in camelCase and are a
//! stable contract for downstream storage and templating.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extractor::analytics::AnalyticsProvider;
use crate::keywords::{ConsistencyMatrix, KeywordCloud};
use crate::ordered::OrderedMap;
use crate::w3c::W3cSummary;

/// Bucket names a serialized fact set must carry.
const REQUIRED_BUCKETS: &[&str] = &[
    "meta",
    "document",
    "content",
    "links",
    "flags",
    "optimization",
    "analytics",
    "w3c",
    "keywordCloud",
    "consistencyMatrix",
];

/// All facts derived from one HTML document and its site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    pub meta: MetaFacts,
    pub document: DocumentFacts,
    pub content: ContentFacts,
    pub links: LinkFacts,
    pub flags: Flags,
    pub optimization: OptimizationFacts,
    pub analytics: BTreeSet<AnalyticsProvider>,
    pub w3c: W3cSummary,
    pub keyword_cloud: KeywordCloud,
    pub consistency_matrix: ConsistencyMatrix,
}

impl FactSet {
    /// Encode to the JSON shape downstream storage expects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a fact set, naming the first absent bucket.
    ///
    /// A missing bucket is a caller bug and yields [`Error::MissingFact`]
    /// rather than a zero-valued default that would score as a failing page.
    ///
    /// The bucket check runs on a `Value`, whose objects are key-sorted; the
    /// fact set itself is decoded from the original text so ordered maps
    /// keep their key order.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or(Error::MissingFact("meta"))?;

        if let Some(missing) = REQUIRED_BUCKETS.iter().find(|b| !object.contains_key(**b)) {
            return Err(Error::MissingFact(*missing));
        }

        Ok(serde_json::from_str(json)?)
    }
}

/// Title, description, keywords and Open Graph properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaFacts {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Open Graph properties in document order, first value per property.
    pub og_properties: OrderedMap<String, String>,
}

/// Document-level structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFacts {
    pub doctype: String,
    pub lang: String,
    pub charset: String,
    pub css_count: usize,
    pub js_count: usize,
    /// Stripped-text bytes over markup bytes, percent, rounded.
    pub html_ratio: f64,
    /// Absolute favicon URL, or empty.
    pub favicon: String,
    pub deprecated_tags: BTreeMap<String, usize>,
}

/// Heading texts per level, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

impl Headings {
    /// Heading lists paired with their tag names, `h1` first.
    pub fn levels(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("h1", self.h1.as_slice()),
            ("h2", self.h2.as_slice()),
            ("h3", self.h3.as_slice()),
            ("h4", self.h4.as_slice()),
            ("h5", self.h5.as_slice()),
            ("h6", self.h6.as_slice()),
        ]
        .into_iter()
    }

    /// Mutable list for a heading tag name.
    pub(crate) fn level_mut(&mut self, tag: &str) -> Option<&mut Vec<String>> {
        match tag {
            "h1" => Some(&mut self.h1),
            "h2" => Some(&mut self.h2),
            "h3" => Some(&mut self.h3),
            "h4" => Some(&mut self.h4),
            "h5" => Some(&mut self.h5),
            "h6" => Some(&mut self.h6),
            _ => None,
        }
    }

    /// All heading text joined by spaces, for substring tests.
    #[must_use]
    pub fn flattened(&self) -> String {
        self.levels()
            .flat_map(|(_, texts)| texts.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Headings and image alt coverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFacts {
    pub headings: Headings,
    pub total_images: usize,
    pub total_images_with_alt: usize,
    /// `src` of each image failing the alt test, document order, duplicates kept.
    pub images_missing_alt: Vec<String>,
    /// True iff the `h1` list is non-empty.
    pub has_headings: bool,
}

/// Whether a link stays on the analyzed site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Internal,
    External,
}

/// Whether a link passes ranking authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Juice {
    Dofollow,
    Nofollow,
}

/// One classified anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    pub anchor_text: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub juice: Juice,
}

/// Classified links and their aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFacts {
    pub links: Vec<Link>,
    pub internal_count: usize,
    pub external_dofollow_count: usize,
    pub external_nofollow_count: usize,
    /// True iff no link target carries a query string.
    pub friendly: bool,
    /// True iff any link path contains `_`.
    pub has_underscore: bool,
    pub file_link_count: usize,
}

impl Default for LinkFacts {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            internal_count: 0,
            external_dofollow_count: 0,
            external_nofollow_count: 0,
            friendly: true,
            has_underscore: false,
            file_link_count: 0,
        }
    }
}

/// Boolean page signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    pub flash: bool,
    pub iframe: bool,
    pub nested_tables: bool,
    pub inline_css: bool,
    pub plain_email: bool,
    pub viewport: bool,
    pub dublin_core: bool,
    pub apple_icon: bool,
    pub printable: bool,
    pub robots_txt: bool,
    pub gzip: bool,
}

/// Sitemaps discovered for the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationFacts {
    pub sitemap_urls: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_link_set_is_friendly() {
        let links = LinkFacts::default();
        assert!(links.friendly);
        assert!(!links.has_underscore);
    }

    #[test]
    fn headings_flatten_in_level_order() {
        let headings = Headings {
            h1: vec!["Main".into()],
            h3: vec!["Detail".into()],
            h2: vec!["Section".into(), "Other".into()],
            ..Headings::default()
        };
        assert_eq!(headings.flattened(), "Main Section Other Detail");
    }

    #[test]
    fn link_serializes_type_and_juice_lowercase() {
        let link = Link {
            url: "https://other.com/".into(),
            anchor_text: String::new(),
            link_type: LinkType::External,
            juice: Juice::Nofollow,
        };
        let json = serde_json::to_value(&link).expect("serialize");
        assert_eq!(json["type"], "external");
        assert_eq!(json["juice"], "nofollow");
        assert_eq!(json["anchorText"], "");
    }

    #[test]
    fn from_json_names_missing_bucket() {
        let mut value = serde_json::to_value(FactSet::default()).expect("serialize");
        value.as_object_mut().expect("object").remove("keywordCloud");
        let err = FactSet::from_json(&value.to_string()).expect_err("missing bucket");
        assert!(matches!(err, Error::MissingFact("keywordCloud")));
    }

    #[test]
    fn from_json_keeps_cloud_rank_order() {
        let facts = crate::analyze(
            "<p>zebra zebra zebra apple apple mango</p>",
            "example.com",
            &crate::AnalyzeOptions::default(),
        );
        let decoded = FactSet::from_json(&facts.to_json().expect("encode")).expect("decode");

        let words: Vec<&str> = decoded.keyword_cloud.keys().map(String::as_str).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
        assert_eq!(decoded, facts);
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(matches!(FactSet::from_json("[]"), Err(Error::MissingFact(_))));
        assert!(matches!(FactSet::from_json("not json"), Err(Error::Json(_))));
    }
}
