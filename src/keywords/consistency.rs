//! Cross-reference of top cloud words against title, description, keywords
//! and headings.

use serde::{Deserialize, Serialize};

use crate::facts::{Headings, MetaFacts};
use crate::keywords::cloud::KeywordCloud;
use crate::ordered::OrderedMap;

/// Where a cloud word also appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consistency {
    pub title: bool,
    pub description: bool,
    pub keywords: bool,
    pub headings: bool,
}

/// Matrix rows in cloud rank order.
pub type ConsistencyMatrix = OrderedMap<String, Consistency>;

/// Build the matrix for the `count` highest-ranked cloud words.
///
/// Each test is a case-insensitive substring match, so `seo` counts as
/// present in a title reading "SEO-friendly".
#[must_use]
pub fn build(cloud: &KeywordCloud, meta: &MetaFacts, headings: &Headings, count: usize) -> ConsistencyMatrix {
    let title = meta.title.to_lowercase();
    let description = meta.description.to_lowercase();
    let keywords = meta.keywords.to_lowercase();
    let heading_text = headings.flattened().to_lowercase();

    cloud
        .keys()
        .take(count)
        .map(|word| {
            let word_lower = word.to_lowercase();
            let row = Consistency {
                title: title.contains(&word_lower),
                description: description.contains(&word_lower),
                keywords: keywords.contains(&word_lower),
                headings: heading_text.contains(&word_lower),
            };
            (word.clone(), row)
        })
        .collect()
}
