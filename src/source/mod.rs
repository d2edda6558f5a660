//! Text sources: where document lines come from.
//!
//! A [`TextSource`] yields a document's pages lazily as plain strings; the
//! pipeline splits each page into lines and drops the page text once its
//! lines are parsed. A source is not resumable: an error on any page fails the
//! whole document, and re-reading means calling [`TextSource::pages`] again.
//!
//! | Input | Source |
//! |---|---|
//! | `.txt`, `.text` | [`PlainTextSource`] |
//! | `.png`, `.jpg`, `.jpeg`, `.bmp`, `.tif`, `.tiff` | [`TesseractSource`] |
//! | `.pdf` (feature `pdf`) | `PdfSource` |
//! | in memory | [`MemorySource`] |

pub mod memory;
pub mod ocr;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text_file;

pub use memory::MemorySource;
pub use ocr::{is_tesseract_available, TesseractSource};
#[cfg(feature = "pdf")]
pub use pdf::PdfSource;
pub use text_file::PlainTextSource;

use crate::error::{Error, Result};
use std::path::Path;

/// Lazy sequence of page texts.
pub type Pages<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// Page separator emitted by tesseract and `pdftotext`.
pub const PAGE_SEPARATOR: char = '\u{000C}';

/// Produces the text of one document, page by page.
pub trait TextSource {
    /// Identifying name of the document, usually its file name.
    fn name(&self) -> &str;

    /// Start extraction.
    ///
    /// Zero pages, or pages without text, are not errors.
    fn pages(&self) -> Result<Pages<'_>>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pages(&self) -> Result<Pages<'_>> {
        (**self).pages()
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pages(&self) -> Result<Pages<'_>> {
        (**self).pages()
    }
}

/// Options for the file-backed sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    /// Tesseract language code
    pub ocr_language: String,

    /// Tesseract page segmentation mode (`--psm`)
    pub page_segmentation_mode: u8,

    /// OCR PDF pages when the PDF has no extractable text
    pub ocr_fallback: bool,

    /// Render resolution for PDF OCR fallback
    pub ocr_dpi: u32,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            ocr_language: "eng".to_string(),
            page_segmentation_mode: 6,
            ocr_fallback: true,
            ocr_dpi: 300,
        }
    }
}

/// Kind of input, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// UTF-8 text, pages separated by form feeds
    PlainText,
    /// Scanned image handed to OCR
    Image,
    /// PDF document
    Pdf,
}

impl InputKind {
    /// Accepted image extensions.
    pub const IMAGE_EXTENSIONS: &'static [&'static str] =
        &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

    /// Classify a path by extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("{} has no file extension", path.display()))
            })?;

        match ext.as_str() {
            "txt" | "text" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            e if Self::IMAGE_EXTENSIONS.contains(&e) => Ok(Self::Image),
            other => Err(Error::UnsupportedFormat(format!(
                "'.{}' ({}); expected text, image ({}) or PDF",
                other,
                path.display(),
                Self::IMAGE_EXTENSIONS.join(", ")
            ))),
        }
    }
}

/// Display name for a file-backed document.
pub(crate) fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open the source matching a file's extension.
///
/// No file IO happens here; a missing or unreadable file surfaces when pages
/// are requested.
pub fn open_source(
    path: impl AsRef<Path>,
    options: &SourceOptions,
) -> Result<Box<dyn TextSource>> {
    let path = path.as_ref();
    match InputKind::from_path(path)? {
        InputKind::PlainText => Ok(Box::new(PlainTextSource::new(path))),
        InputKind::Image => Ok(Box::new(TesseractSource::with_options(path, options))),
        #[cfg(feature = "pdf")]
        InputKind::Pdf => Ok(Box::new(PdfSource::new(path, options.clone()))),
        #[cfg(not(feature = "pdf"))]
        InputKind::Pdf => Err(Error::UnsupportedFormat(format!(
            "{}: PDF input requires the `pdf` feature",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_from_extension() {
        assert_eq!(InputKind::from_path(Path::new("a.txt")).unwrap(), InputKind::PlainText);
        assert_eq!(InputKind::from_path(Path::new("scan.JPG")).unwrap(), InputKind::Image);
        assert_eq!(InputKind::from_path(Path::new("x/y.bmp")).unwrap(), InputKind::Image);
        assert_eq!(InputKind::from_path(Path::new("roster.PDF")).unwrap(), InputKind::Pdf);
    }

    #[test]
    fn test_input_kind_rejects_unknown() {
        assert!(matches!(
            InputKind::from_path(Path::new("roster.docx")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            InputKind::from_path(Path::new("roster")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_open_source_uses_file_name() {
        let source = open_source("/tmp/scans/class_a.png", &SourceOptions::default()).unwrap();
        assert_eq!(source.name(), "class_a.png");
        let source = open_source("notes/list.txt", &SourceOptions::default()).unwrap();
        assert_eq!(source.name(), "list.txt");
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_pdf_needs_feature() {
        assert!(matches!(
            open_source("roster.pdf", &SourceOptions::default()),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
