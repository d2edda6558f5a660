//! Per-document record collection and ordering.

use crate::names::NameRecord;
use serde::Serialize;

/// Line counts gathered while a document is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Pages read from the source
    pub pages: usize,
    /// Lines seen across all pages
    pub lines: usize,
    /// Lines rejected by the noise filter
    pub noise: usize,
    /// Lines that normalized to nothing
    pub emptied: usize,
    /// Clean lines that did not parse as a name
    pub unparsed: usize,
    /// Lines that produced a record
    pub records: usize,
}

/// Names parsed from one document, sorted by last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentResult {
    source_name: String,
    records: Vec<NameRecord>,
    stats: DocumentStats,
}

impl DocumentResult {
    /// Document the records came from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Records in sheet order.
    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    /// Take the records, consuming the result.
    pub fn into_records(self) -> Vec<NameRecord> {
        self.records
    }

    /// Line counts for this document.
    pub fn stats(&self) -> DocumentStats {
        self.stats
    }

    /// Whether no name was found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Collects records in encounter order, then sorts once at the end.
#[derive(Debug, Default)]
pub struct RecordAggregator {
    records: Vec<NameRecord>,
}

impl RecordAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicates are kept.
    pub fn push(&mut self, record: NameRecord) {
        self.records.push(record);
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort and seal the document.
    ///
    /// The sort is stable and case-insensitive on last name, so records with
    /// the same last name keep their encounter order.
    pub fn finish(
        mut self,
        source_name: impl Into<String>,
        stats: DocumentStats,
    ) -> DocumentResult {
        sort_records(&mut self.records);
        DocumentResult {
            source_name: source_name.into(),
            records: self.records,
            stats,
        }
    }
}

/// Stable, case-insensitive sort by last name.
pub fn sort_records(records: &mut [NameRecord]) {
    records.sort_by_cached_key(|r| r.last_name().to_lowercase());
}
