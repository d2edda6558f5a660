//! Sheet assembly: document results to tabular sheet descriptions.
//!
//! The assembler decides sheet labels, row content and column widths. Turning
//! a [`SheetSpec`] into workbook bytes belongs to a [`SpreadsheetSink`].

pub mod sink;

pub use sink::{CsvDirectorySink, JsonWorkbookSink, MemorySink, SpreadsheetSink};

use crate::config::{EmptyDocumentPolicy, OutputLayout, SheetOptions, MIN_SHEET_NAME_LIMIT};
use crate::names::{NameRecord, NAME_HEADERS};
use crate::pipeline::{sort_records, DocumentFailure, DocumentResult};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// Characters workbook formats reject in sheet names.
const INVALID_LABEL_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// One sheet: label, header row, data rows and column width hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSpec {
    /// Sheet name, unique within the workbook
    pub label: String,
    /// Header row
    pub headers: [String; 3],
    /// Data rows: last name, first name, middle initial
    pub rows: Vec<[String; 3]>,
    /// Width of each column in characters, padding included
    pub column_widths: [usize; 3],
}

impl SheetSpec {
    /// Build a sheet from sorted records.
    pub fn from_records(label: String, records: &[NameRecord], padding: usize) -> Self {
        let headers = NAME_HEADERS.map(str::to_string);
        let rows: Vec<[String; 3]> = records.iter().map(NameRecord::to_row).collect();
        let column_widths = column_widths(&headers, &rows, padding);
        Self {
            label,
            headers,
            rows,
            column_widths,
        }
    }
}

/// Sheets ready for a sink, plus what the batch left out.
#[derive(Debug)]
pub struct Workbook {
    /// Sheets in document order
    pub sheets: Vec<SheetSpec>,
    /// Documents skipped because extraction failed
    pub failures: Vec<DocumentFailure>,
    /// Documents that were read but yielded no names
    pub empty_documents: Vec<String>,
}

/// Per column: widest cell or header, in characters, plus `padding`.
pub fn column_widths(headers: &[String; 3], rows: &[[String; 3]], padding: usize) -> [usize; 3] {
    let mut widths = headers.clone().map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| w + padding)
}

/// Sheet label for a document name.
///
/// Uses the file stem, replaces characters sheet names cannot hold, and
/// truncates to `limit` characters. Falls back to `default_label` when
/// nothing usable remains.
pub fn sheet_label(source_name: &str, limit: usize, default_label: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let cleaned: String = stem
        .chars()
        .map(|c| if INVALID_LABEL_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'');
    let truncated: String = cleaned.chars().take(limit).collect();
    let truncated = truncated.trim_end();

    if truncated.is_empty() {
        default_label.chars().take(limit).collect()
    } else {
        truncated.to_string()
    }
}

/// Make `label` unique (case-insensitively) among `taken`, within `limit` characters.
///
/// `limit` must be at least [`MIN_SHEET_NAME_LIMIT`].
fn unique_label(label: String, taken: &mut HashSet<String>, limit: usize) -> String {
    if taken.insert(label.to_lowercase()) {
        return label;
    }
    let mut n = 2;
    loop {
        let suffix = format!(" ({})", n);
        let room = limit.saturating_sub(suffix.chars().count());
        let base: String = label.chars().take(room).collect();
        let candidate = format!("{}{}", base.trim_end(), suffix);
        if taken.insert(candidate.to_lowercase()) {
            return candidate;
        }
        n += 1;
    }
}

/// Turn document results into sheets, consuming each result once.
///
/// With [`OutputLayout::PerDocument`] every document gets a sheet, in input
/// order; documents without names get a header-only sheet unless
/// [`EmptyDocumentPolicy::Skip`] is set. With [`OutputLayout::Combined`] all
/// records go into one sheet labelled with the default label.
///
/// A `sheet_name_limit` below [`MIN_SHEET_NAME_LIMIT`] is raised to it.
pub fn assemble_workbook_spec<I>(results: I, options: &SheetOptions) -> Vec<SheetSpec>
where
    I: IntoIterator<Item = DocumentResult>,
{
    let limit = options.sheet_name_limit.max(MIN_SHEET_NAME_LIMIT);

    match options.layout {
        OutputLayout::Combined => {
            let mut records: Vec<NameRecord> =
                results.into_iter().flat_map(DocumentResult::into_records).collect();
            sort_records(&mut records);
            let label = sheet_label("", limit, &options.default_sheet_label);
            vec![SheetSpec::from_records(label, &records, options.column_padding)]
        },
        OutputLayout::PerDocument => {
            let mut taken = HashSet::new();
            results
                .into_iter()
                .filter(|doc| {
                    let skip =
                        doc.is_empty() && options.empty_documents == EmptyDocumentPolicy::Skip;
                    if skip {
                        log::debug!("{}: no names, sheet skipped", doc.source_name());
                    }
                    !skip
                })
                .map(|doc| {
                    let label = sheet_label(doc.source_name(), limit, &options.default_sheet_label);
                    let label = unique_label(label, &mut taken, limit);
                    SheetSpec::from_records(label, doc.records(), options.column_padding)
                })
                .collect()
        },
    }
}
