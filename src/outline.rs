//! H2 topic aggregation.
//!
//! Every H2 collected during a batch goes into an [`OutlineCorpus`]. The
//! recommender groups those headings by a normalized key (lower-cased, filler
//! phrases removed), counts each group and returns the most frequent topics.

use crate::config::RecommenderConfig;
use crate::parsers::text::collapse_whitespace;
use std::collections::HashMap;

/// Append-only list of raw H2 texts gathered across all pages of a batch
#[derive(Debug, Clone, Default)]
pub struct OutlineCorpus {
    headings: Vec<String>,
}

impl OutlineCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, heading: impl Into<String>) {
        self.headings.push(heading.into());
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headings.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for OutlineCorpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            headings: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for OutlineCorpus {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.headings.extend(iter.into_iter().map(Into::into));
    }
}

/// One suggested outline topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEntry {
    /// First-seen original text of the group
    pub text: String,
    /// How many H2s fell into the group
    pub count: usize,
}

impl RecommendationEntry {
    /// Display form, annotated with the count when the topic recurs
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Lower-cases a heading and strips filler phrases so variants group together
pub fn normalize(text: &str, filler_phrases: &[String]) -> String {
    let mut normalized = text.to_lowercase();
    for phrase in filler_phrases {
        let phrase = phrase.trim().to_lowercase();
        if !phrase.is_empty() {
            normalized = normalized.replace(&phrase, " ");
        }
    }
    collapse_whitespace(&normalized)
}

/// Ranks recurring topics in the corpus.
///
/// Groups are ordered by count, descending; groups with equal counts keep the
/// order in which they were first seen. At most `max_topics` entries are
/// returned.
pub fn recommend(corpus: &OutlineCorpus, config: &RecommenderConfig) -> Vec<RecommendationEntry> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<RecommendationEntry> = Vec::new();

    for heading in corpus.iter() {
        let key = normalize(heading, &config.filler_phrases);
        match slots.get(&key) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slots.insert(key, groups.len());
                groups.push(RecommendationEntry {
                    text: heading.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(config.max_topics);

    ::log::debug!(
        "Recommender reduced {} headings to {} topics",
        corpus.len(),
        groups.len()
    );
    groups
}
