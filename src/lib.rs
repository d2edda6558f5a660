// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Roster Oxide
//!
//! Extract person names from scanned or typed rosters and lay them out as
//! spreadsheet sheets: one row per person with last name, first name and
//! middle initial, sorted by last name.
//!
//! ## Pipeline
//!
//! ```text
//! TextSource (text file / tesseract OCR / PDF)
//!     ↓ pages → lines
//! [NoiseFilter] → [LineNormalizer] → [NameParser + SuffixSet]
//!     ↓
//! DocumentResult (sorted records)
//!     ↓
//! [assemble_workbook_spec] → SheetSpec[]
//!     ↓
//! [SpreadsheetSink] (CSV directory / JSON / memory)
//! ```
//!
//! Lines are expected in `Lastname, Firstname Middlename` form. Lines without a
//! comma are ignored unless [`ParseMode::AllowFallback`] is configured.
//! Trailing degree codes and generational suffixes (`BSIT`, `JR`, `III`, ...)
//! are dropped from given names.
//!
//! ## Quick Start
//!
//! ```
//! use roster_oxide::{assemble_workbook_spec, NamePipeline, SheetOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = NamePipeline::with_defaults()?;
//! let doc = pipeline.parse_document(
//!     "section_a.png",
//!     ["1. Dela Cruz, Juan Miguel Santos", "2. Abad, Rosa", "--- 2 ---"],
//! );
//! assert_eq!(doc.records()[0].last_name(), "Abad");
//!
//! let sheets = assemble_workbook_spec(vec![doc], &SheetOptions::default());
//! assert_eq!(sheets[0].label, "section_a");
//! assert_eq!(sheets[0].rows[1], ["Dela Cruz", "Juan Miguel", "S."].map(String::from));
//! # Ok(())
//! # }
//! ```
//!
//! ## Batches
//!
//! [`NamePipeline::process_batch`] extracts several documents in turn. A
//! document that fails extraction is skipped and reported; the batch fails
//! with [`Error::NoValidDocuments`] only when no document yielded a name.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Line processing
pub mod names;
pub mod text;

// Document processing
pub mod pipeline;
pub mod sheet;
pub mod source;

pub use config::{EmptyDocumentPolicy, ExtractionConfig, OutputLayout, ParseMode, SheetOptions};
pub use error::{Error, Result};
pub use names::{NameParser, NameRecord, SuffixSet, NAME_HEADERS};
pub use pipeline::{
    BatchOutcome, DocumentFailure, DocumentResult, DocumentStats, LineOutcome, NamePipeline,
    RecordAggregator,
};
pub use sheet::{
    assemble_workbook_spec, CsvDirectorySink, JsonWorkbookSink, MemorySink, SheetSpec,
    SpreadsheetSink, Workbook,
};
pub use source::{open_source, MemorySource, SourceOptions, TextSource};
pub use text::{LineNormalizer, NoiseFilter, NoiseReason, StopwordSet};
