//! Word-frequency cloud over the visible text of a page.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ordered::OrderedMap;
use crate::patterns::WORD;
use crate::text;

/// Highest relative-frequency grade.
pub const MAX_GRADE: u8 = 5;

/// Frequency and relative grade of one cloud word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudEntry {
    pub count: usize,
    /// 1..=5, where 5 is the most frequent band.
    pub grade: u8,
}

/// Cloud words in rank order: count descending, ties by first occurrence.
pub type KeywordCloud = OrderedMap<String, CloudEntry>;

/// Build the keyword cloud for already-visible text.
///
/// `size` bounds the number of kept words; tokens shorter than
/// `min_word_length` characters, tokens without letters and stop words are
/// dropped before counting.
#[must_use]
pub fn build(visible_text: &str, stop_words: &[&str], size: usize, min_word_length: usize) -> KeywordCloud {
    let stop: HashSet<&str> = stop_words.iter().copied().collect();
    let lowered = visible_text.to_lowercase();

    // word -> (count, first occurrence)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let tokens = WORD
        .find_iter(&lowered)
        .map(|m| m.as_str().replace('’', "'"))
        .filter(|w| text::mb_len(w) >= min_word_length)
        .filter(|w| w.chars().any(char::is_alphabetic))
        .filter(|w| !stop.contains(w.as_str()));

    for (position, word) in tokens.enumerate() {
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> =
        counts.into_iter().map(|(w, (count, first))| (w, count, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(size);

    let max = ranked.first().map_or(0, |(_, count, _)| *count);

    ranked
        .into_iter()
        .map(|(word, count, _)| (word, CloudEntry { count, grade: grade(count, max) }))
        .collect()
}

/// Relative-frequency band: `ceil(count / max * 5)`, clamped to `1..=5`.
///
/// Integer arithmetic keeps band edges exact: a word at exactly 80% of the
/// maximum lands in band 4, anything above lands in band 5.
#[must_use]
pub fn grade(count: usize, max: usize) -> u8 {
    if max == 0 {
        return 1;
    }
    let grades = usize::from(MAX_GRADE);
    let band = (count * grades).div_ceil(max).clamp(1, grades);
    u8::try_from(band).unwrap_or(MAX_GRADE)
}
