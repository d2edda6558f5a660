//! In-memory text source.

use super::{Pages, TextSource};
use crate::error::Result;

/// Pages held in memory, for callers that already have the text.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    pages: Vec<String>,
}

impl MemorySource {
    /// Create a source from page texts.
    pub fn new<I, S>(name: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a single-page source from lines.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let page = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(name, [page])
    }
}

impl TextSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Pages<'_>> {
        Ok(Box::new(self.pages.iter().cloned().map(Ok)))
    }
}
