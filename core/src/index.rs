use crate::tokenizer::{self, NoiseWords};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How often a keyword occurs in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }

    /// Count one more hit, saturating at `u32::MAX`.
    pub fn increment(&mut self) {
        self.frequency = self.frequency.saturating_add(1);
    }
}

/// Keyword counts for a single document, keyed by normalized keyword.
pub type DocumentKeywordCounts = HashMap<String, Occurrence>;

/// Keyword index over a fixed document collection.
///
/// Every keyword maps to a non-empty occurrence list ordered by descending
/// frequency; documents merged earlier come first among equal frequencies.
#[derive(Debug, Default)]
pub struct Index {
    pub(crate) keywords: HashMap<String, Vec<Occurrence>>,
    pub(crate) noise_words: NoiseWords,
}

impl Index {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self { keywords: HashMap::new(), noise_words }
    }

    /// Apply the keyword test with this index's noise words.
    pub fn keyword(&self, word: &str) -> Option<String> {
        tokenizer::keyword(word, &self.noise_words)
    }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise_words }

    /// Ranked occurrences of an already normalized keyword.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }
}
