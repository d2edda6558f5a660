//! Name parsing strategies.
//!
//! # Strategies
//!
//! - **Comma split** (always on): `Lastname, Firstname Middlename`. The text
//!   before the first comma is the last name; the text after it supplies the
//!   given names.
//! - **Whitespace fallback** (opt-in via [`ParseMode::AllowFallback`]):
//!   `Lastname Firstname Middlename` with no comma at all.
//!
//! Given-name tokens are cleaned the same way for both strategies: trailing
//! periods are trimmed (`"M."` becomes `M`), tokens that still contain
//! anything but letters are dropped, and trailing suffixes are stripped. With
//! one token left it is the first name; with more, the last token becomes the
//! middle initial.

use crate::config::ParseMode;
use crate::names::record::NameRecord;
use crate::names::suffix::SuffixSet;

/// Turns cleaned lines into name records.
#[derive(Debug, Clone, Default)]
pub struct NameParser {
    suffixes: SuffixSet,
    mode: ParseMode,
}

impl NameParser {
    /// Create a parser.
    pub fn new(suffixes: SuffixSet, mode: ParseMode) -> Self {
        Self { suffixes, mode }
    }

    /// Parse one cleaned line.
    ///
    /// `None` is the normal outcome for lines that are not names.
    pub fn parse(&self, line: &str) -> Option<NameRecord> {
        if let Some((left, right)) = line.split_once(',') {
            return self.parse_comma_split(left, right);
        }
        match self.mode {
            ParseMode::CommaRequired => None,
            ParseMode::AllowFallback => self.parse_whitespace_fallback(line),
        }
    }

    /// The active parse mode.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    fn parse_comma_split(&self, left: &str, right: &str) -> Option<NameRecord> {
        let last_name = left.trim().trim_start_matches(|c: char| !c.is_alphabetic());
        if last_name.is_empty() {
            return None;
        }
        let tokens = right
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        self.build_record(last_name, tokens)
    }

    fn parse_whitespace_fallback(&self, line: &str) -> Option<NameRecord> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 || !parts.iter().all(|p| is_fallback_word(p)) {
            return None;
        }
        let last_name = parts[0].trim_start_matches(|c: char| !c.is_alphabetic());
        if last_name.is_empty() {
            return None;
        }
        self.build_record(last_name, parts[1..].iter().copied())
    }

    fn build_record<'a>(
        &self,
        last_name: &str,
        tokens: impl Iterator<Item = &'a str>,
    ) -> Option<NameRecord> {
        let given: Vec<&str> = tokens.filter_map(clean_given_token).collect();
        let given = self.suffixes.stripped(&given);

        match given {
            [] => None,
            [first] => NameRecord::new(last_name, first, None),
            [firsts @ .., middle] => NameRecord::new(last_name, &firsts.join(" "), Some(*middle)),
        }
    }
}

/// Trim trailing periods and keep the token only if it is all letters.
fn clean_given_token(token: &str) -> Option<&str> {
    let token = token.trim_end_matches('.');
    if !token.is_empty() && token.chars().all(char::is_alphabetic) {
        Some(token)
    } else {
        None
    }
}

/// Words accepted by the no-comma fallback: letters, periods, hyphens, apostrophes.
fn is_fallback_word(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '.' | '-' | '\''))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SUFFIXES;

    fn parser() -> NameParser {
        NameParser::new(SuffixSet::new(DEFAULT_SUFFIXES), ParseMode::CommaRequired)
    }

    fn fallback_parser() -> NameParser {
        NameParser::new(SuffixSet::new(DEFAULT_SUFFIXES), ParseMode::AllowFallback)
    }

    fn parts(record: &NameRecord) -> (&str, &str, &str) {
        (
            record.last_name(),
            record.first_name(),
            record.middle_initial(),
        )
    }

    #[test]
    fn test_last_first_middle() {
        let r = parser().parse("Dela Cruz, Juan Miguel Santos").unwrap();
        assert_eq!(parts(&r), ("Dela Cruz", "Juan Miguel", "S."));
    }

    #[test]
    fn test_single_given_name() {
        let r = parser().parse("Abad, Rosa").unwrap();
        assert_eq!(parts(&r), ("Abad", "Rosa", ""));
    }

    #[test]
    fn test_suffix_after_second_comma() {
        let r = parser().parse("Reyes, Maria, BSIT").unwrap();
        assert_eq!(parts(&r), ("Reyes", "Maria", ""));
    }

    #[test]
    fn test_generational_suffix_with_period() {
        let r = parser().parse("Rizal, Jose Protacio Jr.").unwrap();
        assert_eq!(parts(&r), ("Rizal", "Jose", "P."));
    }

    #[test]
    fn test_middle_initial_with_period() {
        let r = parser().parse("Santos, Ana M.").unwrap();
        assert_eq!(parts(&r), ("Santos", "Ana", "M."));
    }

    #[test]
    fn test_lowercase_middle_is_uppercased() {
        let r = parser().parse("Garcia, Pedro luna").unwrap();
        assert_eq!(r.middle_initial(), "L.");
    }

    #[test]
    fn test_drops_non_alphabetic_tokens() {
        let r = parser().parse("Lim, Mary-Ann Grace Tan").unwrap();
        assert_eq!(parts(&r), ("Lim", "Grace", "T."));

        let r = parser().parse("Lim, Grace O'Hara").unwrap();
        assert_eq!(parts(&r), ("Lim", "Grace", ""));
    }

    #[test]
    fn test_leading_punctuation_stripped_from_last_name() {
        let r = parser().parse("- . Abad, Rosa").unwrap();
        assert_eq!(r.last_name(), "Abad");

        let r = fallback_parser().parse(".-Bautista Carlo").unwrap();
        assert_eq!(parts(&r), ("Bautista", "Carlo", ""));
    }

    #[test]
    fn test_only_suffixes_yield_nothing() {
        assert!(parser().parse("Reyes, BSIT").is_none());
        assert!(parser().parse("Reyes, Jr. III").is_none());
    }

    #[test]
    fn test_empty_sides_yield_nothing() {
        assert!(parser().parse(", Maria").is_none());
        assert!(parser().parse("Reyes,").is_none());
        assert!(parser().parse("---, Maria").is_none());
    }

    #[test]
    fn test_comma_required_by_default() {
        assert!(parser().parse("Dela Cruz Juan Santos").is_none());
        assert_eq!(parser().mode(), ParseMode::CommaRequired);
    }

    #[test]
    fn test_fallback_without_comma() {
        let r = fallback_parser().parse("Bautista Carlo Reyes").unwrap();
        assert_eq!(parts(&r), ("Bautista", "Carlo", "R."));

        let r = fallback_parser().parse("Bautista Carlo").unwrap();
        assert_eq!(parts(&r), ("Bautista", "Carlo", ""));

        let r = fallback_parser().parse("Bautista Carlo Miguel Reyes").unwrap();
        assert_eq!(parts(&r), ("Bautista", "Carlo Miguel", "R."));
    }

    #[test]
    fn test_fallback_rejects_single_word_and_symbols() {
        assert!(fallback_parser().parse("Bautista").is_none());
        assert!(fallback_parser().parse("Bautista & Sons").is_none());
    }

    #[test]
    fn test_fallback_still_prefers_comma_split() {
        let r = fallback_parser().parse("Dela Cruz, Juan").unwrap();
        assert_eq!(parts(&r), ("Dela Cruz", "Juan", ""));
    }
}
