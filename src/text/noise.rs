//! Noise line rejection.
//!
//! Rosters mix names with page headers, institution banners, column titles and
//! stray OCR debris. The filter runs on the raw line, before normalization, so
//! that stopword phrases are still intact when they are matched.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Lines with no letters at all: digits, punctuation, underscores, whitespace
    static ref RE_NO_LETTERS: Regex = Regex::new(r"^[\d\W_]+$").unwrap();
}

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoiseReason {
    /// Blank after trimming
    Empty,
    /// Digits and punctuation only
    NoLetters,
    /// Contains the given stopword
    Stopword(String),
}

/// Case-insensitive substrings marking non-name lines.
///
/// Matching is substring containment on the lowercased line, so multi-word
/// institutional phrases are caught wherever they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: Vec<String>,
}

impl StopwordSet {
    /// Build a set from raw entries. Entries are lowercased; blank entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.trim().is_empty())
            .collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    /// Return the first stopword contained in `line`.
    pub fn find(&self, line: &str) -> Option<&str> {
        let lower = line.to_lowercase();
        self.words
            .iter()
            .find(|w| lower.contains(w.as_str()))
            .map(String::as_str)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no stopwords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Rejects raw lines that cannot hold a name.
#[derive(Debug, Clone, Default)]
pub struct NoiseFilter {
    stopwords: StopwordSet,
}

impl NoiseFilter {
    /// Create a filter over the given stopwords.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Classify a raw line, returning the rejection reason for noise.
    ///
    /// Checks run in order: blank, no letters, stopword.
    pub fn classify(&self, raw: &str) -> Option<NoiseReason> {
        let line = raw.trim();
        if line.is_empty() {
            return Some(NoiseReason::Empty);
        }
        if RE_NO_LETTERS.is_match(line) {
            return Some(NoiseReason::NoLetters);
        }
        self.stopwords
            .find(line)
            .map(|word| NoiseReason::Stopword(word.to_string()))
    }

    /// Whether a raw line is noise.
    pub fn is_noise(&self, raw: &str) -> bool {
        self.classify(raw).is_some()
    }

    /// The stopwords this filter matches.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}
