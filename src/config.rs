//! Configuration for name extraction.
//!
//! Stopwords, suffixes and the accepted name alphabet are plain data here and
//! are compiled once into an immutable [`NamePipeline`](crate::pipeline::NamePipeline).
//! Extending them is a configuration change, loaded from JSON when needed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Substrings that mark a line as header, institution or form text.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "student list",
    "class list",
    "class record",
    "masterlist",
    "section",
    "grade",
    "school",
    "university",
    "college",
    "department",
    "republic",
    "division",
    "adviser",
    "teacher",
    "subject",
    "semester",
    "last name",
    "first name",
    "middle initial",
    "signature",
    "prepared by",
    "noted by",
    "approved by",
    "total",
];

/// Trailing tokens removed from given names: generational markers and degree codes.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "JR", "SR", "II", "III", "IV", "BSIT", "BSCS", "BSED", "BEED", "BSBA", "BSN", "BSA", "BSHM",
    "BSTM", "BSCE", "BSEE", "BSME", "AB", "BS", "MS", "MBA", "MAED", "MD", "PHD", "EDD", "RN",
    "CPA", "LPT", "ENGR", "ATTY",
];

/// Letters accepted in names beyond ASCII `A-Z`/`a-z`.
pub const DEFAULT_EXTRA_NAME_LETTERS: &str = "Ññ";

/// Workbook sheet-name length limit (the xlsx format caps names at 31 characters).
pub const DEFAULT_SHEET_NAME_LIMIT: usize = 31;

/// Smallest sheet name limit that leaves room for a ` (n)` duplicate marker.
pub const MIN_SHEET_NAME_LIMIT: usize = 8;

/// Label used when a document name yields nothing usable, and for combined output.
pub const DEFAULT_SHEET_LABEL: &str = "Names";

/// Extra characters added to every computed column width.
pub const DEFAULT_COLUMN_PADDING: usize = 2;

/// How lines are turned into names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Only `Lastname, Firstname Middlename` lines produce records (default)
    #[default]
    CommaRequired,
    /// Also accept `Lastname Firstname Middlename` lines without a comma
    AllowFallback,
}

/// How documents map onto sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayout {
    /// One sheet per input document (default)
    #[default]
    PerDocument,
    /// Every record in a single sheet
    Combined,
}

/// What to do with a document that produced no names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDocumentPolicy {
    /// Emit a sheet containing only the header row (default)
    #[default]
    HeaderOnly,
    /// Leave the document out of the workbook
    Skip,
}

/// Sheet assembly options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    /// Per-document or combined output
    pub layout: OutputLayout,

    /// Handling of documents without records
    pub empty_documents: EmptyDocumentPolicy,

    /// Maximum sheet label length, in characters
    pub sheet_name_limit: usize,

    /// Fallback label for unnamed documents and for combined output
    pub default_sheet_label: String,

    /// Padding added to each column width
    pub column_padding: usize,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            layout: OutputLayout::default(),
            empty_documents: EmptyDocumentPolicy::default(),
            sheet_name_limit: DEFAULT_SHEET_NAME_LIMIT,
            default_sheet_label: DEFAULT_SHEET_LABEL.to_string(),
            column_padding: DEFAULT_COLUMN_PADDING,
        }
    }
}

/// Name extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Case-insensitive substrings marking a line as noise
    pub stopwords: Vec<String>,

    /// Case-insensitive trailing tokens stripped from given names
    pub suffixes: Vec<String>,

    /// Letters accepted in names in addition to ASCII letters
    pub extra_name_letters: String,

    /// Comma-required or fallback parsing
    pub parse_mode: ParseMode,

    /// Sheet assembly options
    pub sheets: SheetOptions,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            extra_name_letters: DEFAULT_EXTRA_NAME_LETTERS.to_string(),
            parse_mode: ParseMode::default(),
            sheets: SheetOptions::default(),
        }
    }

    /// Load configuration from a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loading extraction config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Check values that would make the pipeline misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.sheets.sheet_name_limit < MIN_SHEET_NAME_LIMIT {
            return Err(Error::Config(format!(
                "sheet_name_limit must be at least {}",
                MIN_SHEET_NAME_LIMIT
            )));
        }
        if self.sheets.default_sheet_label.trim().is_empty() {
            return Err(Error::Config("default_sheet_label must not be empty".to_string()));
        }
        if let Some(c) = self.extra_name_letters.chars().find(|c| !c.is_alphabetic()) {
            return Err(Error::Config(format!("extra_name_letters contains non-letter {:?}", c)));
        }
        Ok(())
    }

    /// Replace the stopword list.
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the suffix list.
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set letters accepted in names beyond ASCII.
    pub fn with_extra_name_letters(mut self, letters: impl Into<String>) -> Self {
        self.extra_name_letters = letters.into();
        self
    }

    /// Set the parse mode.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Set the output layout.
    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.sheets.layout = layout;
        self
    }

    /// Set the policy for documents without records.
    pub fn with_empty_documents(mut self, policy: EmptyDocumentPolicy) -> Self {
        self.sheets.empty_documents = policy;
        self
    }
}
