//! Trailing suffix removal for given-name tokens.
//!
//! Rosters often append degree codes ("BSIT") or generational markers ("JR",
//! "III") after the given names. They would otherwise be taken for a middle
//! name, so they are removed from the end of the token list before the first
//! name and middle initial are derived.

use std::collections::HashSet;

/// Case-insensitive set of suffix tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixSet {
    tokens: HashSet<String>,
}

impl SuffixSet {
    /// Build a set from raw entries. Entries are trimmed and uppercased; blanks are dropped.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_uppercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    /// Whether `token` is a suffix, ignoring case.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token.to_uppercase())
    }

    /// The prefix of `tokens` left after dropping trailing suffixes.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::names::SuffixSet;
    ///
    /// let suffixes = SuffixSet::new(["JR", "BSIT"]);
    /// assert_eq!(suffixes.stripped(&["Juan", "Jr", "bsit"]), &["Juan"]);
    /// assert_eq!(suffixes.stripped(&["Jr", "Juan"]), &["Jr", "Juan"]);
    /// ```
    pub fn stripped<'a, S: AsRef<str>>(&self, tokens: &'a [S]) -> &'a [S] {
        let mut end = tokens.len();
        while end > 0 && self.contains(tokens[end - 1].as_ref()) {
            end -= 1;
        }
        &tokens[..end]
    }

    /// Remove trailing suffixes from `tokens` in place.
    pub fn strip(&self, tokens: &mut Vec<String>) {
        let keep = self.stripped(tokens.as_slice()).len();
        tokens.truncate(keep);
    }

    /// Number of suffixes.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the set has no suffixes.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
