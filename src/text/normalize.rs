//! Line cleanup before name parsing.
//!
//! OCR and PDF text carries row numbers, bullets, stray symbols and form
//! labels around the names. The normalizer removes them so that only letters,
//! whitespace and the punctuation that appears inside names survives.
//!
//! # Steps
//!
//! 1. Strip a leading `Name:` / `Name -` label (case-insensitive)
//! 2. Remove every digit
//! 3. Remove every character outside the name alphabet
//!    (`A-Z`, `a-z`, configured extra letters, whitespace, `,` `.` `-` `'`)
//! 4. Trim

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading form label such as "Name:", "NAME -" or "names::"
    static ref RE_NAME_PREFIX: Regex = Regex::new(r"(?i)^\s*names?\b\s*[:\-]*").unwrap();

    /// Any run of decimal digits
    static ref RE_DIGITS: Regex = Regex::new(r"\d+").unwrap();
}

/// Cleans raw text lines down to the characters names are made of.
#[derive(Debug, Clone)]
pub struct LineNormalizer {
    /// Matches every character outside the name alphabet
    disallowed: Regex,
}

impl LineNormalizer {
    /// Create a normalizer accepting ASCII letters plus `extra_letters`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the character class cannot be compiled.
    pub fn new(extra_letters: &str) -> Result<Self> {
        let pattern = format!(r"[^A-Za-z{}\s,.\-']", regex::escape(extra_letters));
        let disallowed = Regex::new(&pattern)
            .map_err(|e| Error::Config(format!("invalid name alphabet: {}", e)))?;
        Ok(Self { disallowed })
    }

    /// Normalize one raw line.
    ///
    /// Never fails; a line made only of symbols normalizes to `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::text::LineNormalizer;
    ///
    /// let normalizer = LineNormalizer::new("Ññ").unwrap();
    /// assert_eq!(normalizer.normalize("Name: Peña, José*"), "Peña, Jos");
    /// assert_eq!(normalizer.normalize("### 42 ***"), "");
    /// ```
    pub fn normalize(&self, raw: &str) -> String {
        let without_prefix = RE_NAME_PREFIX.replace(raw, "");
        let without_digits = RE_DIGITS.replace_all(&without_prefix, "");
        let cleaned = self.disallowed.replace_all(&without_digits, "");
        cleaned.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> LineNormalizer {
        LineNormalizer::new(crate::config::DEFAULT_EXTRA_NAME_LETTERS).unwrap()
    }

    #[test]
    fn test_strips_name_prefix() {
        let n = normalizer();
        assert_eq!(n.normalize("Name: Santos, Ana"), "Santos, Ana");
        assert_eq!(n.normalize("NAME - Santos, Ana"), "Santos, Ana");
        assert_eq!(n.normalize("  name:- Santos, Ana"), "Santos, Ana");
        assert_eq!(n.normalize("Names: Santos, Ana"), "Santos, Ana");
    }

    #[test]
    fn test_prefix_requires_word_boundary() {
        let n = normalizer();
        assert_eq!(n.normalize("Namekawa, Hiro"), "Namekawa, Hiro");
    }

    #[test]
    fn test_removes_digits() {
        let n = normalizer();
        assert_eq!(n.normalize("12. Dela Cruz, Juan"), ". Dela Cruz, Juan");
        assert_eq!(n.normalize("Ab4ad, Ro5sa"), "Abad, Rosa");
    }

    #[test]
    fn test_removes_symbols_but_keeps_name_punctuation() {
        let n = normalizer();
        assert_eq!(n.normalize("* O'Neil-Ramos, Mary (Ann) #"), "O'Neil-Ramos, Mary Ann");
        assert_eq!(n.normalize("|Reyes, Maria|"), "Reyes, Maria");
    }

    #[test]
    fn test_keeps_enye() {
        let n = normalizer();
        assert_eq!(n.normalize("Peñaflor, Niño"), "Peñaflor, Niño");
        assert_eq!(n.normalize("MUÑOZ, JOSE"), "MUÑOZ, JOSE");
    }

    #[test]
    fn test_other_accents_are_configurable() {
        assert_eq!(normalizer().normalize("Gómez, Ana"), "Gmez, Ana");
        let n = LineNormalizer::new("Ññáéíóú").unwrap();
        assert_eq!(n.normalize("Gómez, Ana"), "Gómez, Ana");
    }

    #[test]
    fn test_all_symbols_normalize_to_empty() {
        let n = normalizer();
        assert_eq!(n.normalize("123 ### 456"), "");
        assert_eq!(n.normalize("@@@"), "");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalizer().normalize("   Abad, Rosa \t"), "Abad, Rosa");
    }
}
