//! Multi-document batches.
//!
//! Each document is extracted independently. A failing document is recorded
//! and skipped; the batch only fails as a whole, with
//! [`Error::NoValidDocuments`], when no document produced a single name.

use super::{DocumentResult, NamePipeline};
use crate::config::SheetOptions;
use crate::error::{Error, Result};
use crate::sheet::{assemble_workbook_spec, Workbook};
use crate::source::TextSource;

/// A document whose extraction failed.
#[derive(Debug)]
pub struct DocumentFailure {
    /// Document name
    pub source_name: String,
    /// Why extraction failed
    pub error: Error,
}

/// Successes and failures of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    documents: Vec<DocumentResult>,
    failures: Vec<DocumentFailure>,
}

impl BatchOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's extraction result into the outcome.
    pub fn record(&mut self, source_name: &str, result: Result<DocumentResult>) {
        match result {
            Ok(document) => {
                if document.is_empty() {
                    log::warn!("{}: no names found", source_name);
                } else {
                    log::info!("{}: {} names", source_name, document.len());
                }
                self.documents.push(document);
            },
            Err(error) => self.push_failure(source_name, error),
        }
    }

    /// Record a document that failed before or during extraction.
    pub fn push_failure(&mut self, source_name: impl Into<String>, error: Error) {
        let source_name = source_name.into();
        log::warn!("{}: skipped, {}", source_name, error);
        self.failures.push(DocumentFailure { source_name, error });
    }

    /// Documents that were extracted, including those without names.
    pub fn documents(&self) -> &[DocumentResult] {
        &self.documents
    }

    /// Documents whose extraction failed.
    pub fn failures(&self) -> &[DocumentFailure] {
        &self.failures
    }

    /// Names of extracted documents that yielded no records.
    pub fn empty_documents(&self) -> Vec<&str> {
        self.documents
            .iter()
            .filter(|d| d.is_empty())
            .map(|d| d.source_name())
            .collect()
    }

    /// Number of documents submitted.
    pub fn attempted(&self) -> usize {
        self.documents.len() + self.failures.len()
    }

    /// Total records over all documents.
    pub fn total_records(&self) -> usize {
        self.documents.iter().map(DocumentResult::len).sum()
    }

    /// Assemble the workbook, consuming every document result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidDocuments`] when no document yielded a record.
    pub fn into_workbook(self, options: &SheetOptions) -> Result<Workbook> {
        if self.total_records() == 0 {
            log::error!(
                "No names extracted: {} documents, {} failed",
                self.attempted(),
                self.failures.len()
            );
            return Err(Error::NoValidDocuments {
                attempted: self.attempted(),
                failed: self.failures.len(),
            });
        }

        let empty_documents = self
            .empty_documents()
            .into_iter()
            .map(str::to_string)
            .collect();
        let sheets = assemble_workbook_spec(self.documents, options);
        Ok(Workbook {
            sheets,
            failures: self.failures,
            empty_documents,
        })
    }
}

impl NamePipeline {
    /// Extract every source in order, continuing past failures. Never fails.
    pub fn process_batch<I, T>(&self, sources: I) -> BatchOutcome
    where
        I: IntoIterator<Item = T>,
        T: TextSource,
    {
        sources
            .into_iter()
            .fold(BatchOutcome::new(), |mut outcome, source| {
                let result = self.extract_document(&source);
                outcome.record(source.name(), result);
                outcome
            })
    }

    /// Extract every source and assemble the workbook with the configured sheet options.
    pub fn build_workbook<I, T>(&self, sources: I) -> Result<Workbook>
    where
        I: IntoIterator<Item = T>,
        T: TextSource,
    {
        self.process_batch(sources)
            .into_workbook(self.sheet_options())
    }
}
