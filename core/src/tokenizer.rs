use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref ENGLISH: NoiseWords = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Words that are never indexed. Stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    /// Built-in English stop list.
    pub fn english() -> Self { ENGLISH.clone() }

    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_lowercase());
        }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut noise = NoiseWords::new();
        for word in iter {
            noise.insert(word.as_ref());
        }
        noise
    }
}

/// Normalize a raw token into a keyword.
///
/// The token is lowercased and split into a leading run of letters, the run of
/// non-letters after it, and whatever follows. A token is accepted only when
/// nothing follows the trailing run, so `"word?!"` yields `"word"` while
/// `"can't"` and `"3d"` are rejected. Any non-letter counts as punctuation here,
/// not just `. , ? : ; !`.
pub fn keyword(word: &str, noise: &NoiseWords) -> Option<String> {
    let word = word.to_lowercase();
    let split = word.find(|c: char| !c.is_alphabetic()).unwrap_or(word.len());
    let (pre, rest) = word.split_at(split);
    // letters after the trailing block
    if rest.chars().any(char::is_alphabetic) {
        return None;
    }
    if pre.is_empty() || noise.contains(pre) {
        return None;
    }
    Some(pre.to_string())
}
