//! Plain text files, such as saved OCR output.

use super::{file_display_name, Pages, TextSource, PAGE_SEPARATOR};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A text file whose pages are separated by form feeds.
///
/// Invalid UTF-8 is replaced rather than rejected; OCR output is often
/// slightly damaged and the noise filter discards what cannot be read.
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    path: PathBuf,
    name: String,
}

impl PlainTextSource {
    /// Create a source for `path`. The file is read when pages are requested.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = file_display_name(&path);
        Self { path, name }
    }
}

impl TextSource for PlainTextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Pages<'_>> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| Error::extraction(&self.name, format!("cannot read file: {}", e)))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        log::debug!("Read {} bytes of text from {}", bytes.len(), self.path.display());

        let pages: Vec<String> = text.split(PAGE_SEPARATOR).map(str::to_string).collect();
        Ok(Box::new(pages.into_iter().map(Ok)))
    }
}
