//! PDF input: direct text extraction, with OCR for scanned PDFs.
//!
//! Text is extracted with `pdf_oxide`. When no page yields any text the PDF
//! is treated as scanned: pages are rendered with `pdftoppm` (poppler-utils)
//! into a temporary directory and each image goes through tesseract.

use super::ocr::run_tesseract;
use super::{file_display_name, Pages, SourceOptions, TextSource};
use crate::error::{Error, Result};
use pdf_oxide::document::PdfDocument;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A PDF document.
#[derive(Debug, Clone)]
pub struct PdfSource {
    path: PathBuf,
    name: String,
    options: SourceOptions,
}

impl PdfSource {
    /// Create a source for `path`.
    pub fn new(path: impl AsRef<Path>, options: SourceOptions) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = file_display_name(&path);
        Self {
            path,
            name,
            options,
        }
    }

    fn extract_text_pages(&self) -> Result<Vec<String>> {
        let doc = PdfDocument::open(&self.path)?;
        let page_count = doc.page_count()?;
        log::debug!("{}: {} pages", self.name, page_count);

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            pages.push(doc.extract_text(page_index)?);
        }
        Ok(pages)
    }

    fn ocr_pages(&self) -> Result<Vec<String>> {
        let temp_dir = tempfile::tempdir()?;
        let output_prefix = temp_dir.path().join("page");

        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.options.ocr_dpi.to_string())
            .arg(&self.path)
            .arg(&output_prefix)
            .output()
            .map_err(|e| Error::OcrUnavailable(format!("failed to run pdftoppm: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::extraction(
                &self.name,
                format!("pdftoppm failed: {}", stderr.trim()),
            ));
        }

        let mut images: Vec<PathBuf> = std::fs::read_dir(temp_dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
            .collect();
        images.sort();
        log::info!("{}: rendered {} pages for OCR", self.name, images.len());

        images
            .iter()
            .map(|image| {
                run_tesseract(
                    image,
                    &self.name,
                    &self.options.ocr_language,
                    self.options.page_segmentation_mode,
                )
            })
            .collect()
    }
}

/// Whether extracted pages should be replaced by OCR output.
///
/// Only a PDF with no text on any page is treated as scanned.
fn needs_ocr(pages: &[String], ocr_fallback: bool) -> bool {
    let has_text = pages.iter().any(|p| !p.trim().is_empty());
    log::debug!("PDF has text: {}", has_text);
    !has_text && ocr_fallback
}

impl TextSource for PdfSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Pages<'_>> {
        let pages = self.extract_text_pages()?;

        let pages = if needs_ocr(&pages, self.options.ocr_fallback) {
            log::warn!("{}: no extractable text, falling back to OCR", self.name);
            self.ocr_pages()?
        } else {
            pages
        };
        Ok(Box::new(pages.into_iter().map(Ok)))
    }
}
