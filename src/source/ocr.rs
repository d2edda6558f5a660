//! OCR through the `tesseract` command-line tool.
//!
//! Requires `tesseract` (tesseract-ocr) on `PATH`. The recognized text is
//! trusted as-is; accuracy is the OCR engine's concern.

use super::{file_display_name, Pages, SourceOptions, TextSource, PAGE_SEPARATOR};
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Check whether the `tesseract` binary can be run.
pub fn is_tesseract_available() -> bool {
    let available = Command::new("tesseract")
        .arg("--version")
        .output()
        .is_ok();
    if !available {
        log::debug!("tesseract not found - install tesseract-ocr for image support");
    }
    available
}

/// Run tesseract on one image and return the recognized text.
pub(crate) fn run_tesseract(
    image: &Path,
    source_name: &str,
    language: &str,
    psm: u8,
) -> Result<String> {
    let output = Command::new("tesseract")
        .arg(image)
        .arg("stdout")
        .arg("-l")
        .arg(language)
        .arg("--psm")
        .arg(psm.to_string())
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                Error::OcrUnavailable("tesseract is not installed or not on PATH".to_string())
            },
            _ => Error::extraction(source_name, format!("failed to run tesseract: {}", e)),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::extraction(
            source_name,
            format!("tesseract exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// A scanned image read through tesseract.
#[derive(Debug, Clone)]
pub struct TesseractSource {
    path: PathBuf,
    name: String,
    language: String,
    psm: u8,
}

impl TesseractSource {
    /// Create a source for `path` with default OCR options.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, &SourceOptions::default())
    }

    /// Create a source for `path` with the given OCR options.
    pub fn with_options(path: impl AsRef<Path>, options: &SourceOptions) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = file_display_name(&path);
        Self {
            path,
            name,
            language: options.ocr_language.clone(),
            psm: options.page_segmentation_mode,
        }
    }
}

impl TextSource for TesseractSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Pages<'_>> {
        if !self.path.is_file() {
            return Err(Error::extraction(&self.name, "image file not found"));
        }

        log::info!("Running OCR on {} (lang={})", self.name, self.language);
        let text = run_tesseract(&self.path, &self.name, &self.language, self.psm)?;
        log::debug!("OCR produced {} chars for {}", text.len(), self.name);

        // Multi-frame TIFFs come back as form-feed separated pages.
        let pages: Vec<String> = text
            .split(PAGE_SEPARATOR)
            .filter(|p| !p.trim().is_empty())
            .map(str::to_string)
            .collect();
        Ok(Box::new(pages.into_iter().map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_applied() {
        let options = SourceOptions {
            ocr_language: "fil".to_string(),
            page_segmentation_mode: 4,
            ..SourceOptions::default()
        };
        let source = TesseractSource::with_options("scans/section_b.png", &options);
        assert_eq!(source.name(), "section_b.png");
        assert_eq!(source.language, "fil");
        assert_eq!(source.psm, 4);
    }

    #[test]
    fn test_availability_matches_run_outcome() {
        let mut image = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        std::io::Write::write_all(&mut image, b"not an image").unwrap();
        let source = TesseractSource::new(image.path());

        match source.pages() {
            Err(Error::OcrUnavailable(_)) => assert!(!is_tesseract_available()),
            Err(Error::Extraction { .. }) | Ok(_) => assert!(is_tesseract_available()),
            Err(other) => panic!("unexpected error for unreadable image: {}", other),
        };
    }

    #[test]
    fn test_missing_image_is_extraction_error() {
        let source = TesseractSource::new("/nonexistent/scan.png");
        assert!(matches!(source.pages(), Err(Error::Extraction { .. })));
    }
}
