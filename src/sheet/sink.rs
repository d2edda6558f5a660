//! Spreadsheet sinks: where assembled sheets are written.
//!
//! A sink receives the finished sheet descriptions for one workbook and owns
//! the output format entirely.

use super::SheetSpec;
use crate::error::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Accepts the sheets of one workbook.
pub trait SpreadsheetSink {
    /// Write all sheets, in order.
    fn write_workbook(&mut self, sheets: &[SheetSpec]) -> Result<()>;
}

/// Writes each sheet as `<label>.csv` in a directory, header row first.
#[derive(Debug, Clone)]
pub struct CsvDirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvDirectorySink {
    /// Create a sink writing into `dir`. The directory is created on write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn file_stem(label: &str) -> String {
        label
            .chars()
            .map(|c| match c {
                '<' | '>' | '"' | '|' | '/' | '\\' | ':' | '*' | '?' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    }

    /// File name for `label`, made unique (case-insensitively) among `taken`.
    ///
    /// Distinct labels can map to the same stem once path characters are
    /// replaced; later ones get `-2`, `-3`, ... appended.
    fn file_name(label: &str, taken: &mut HashSet<String>) -> String {
        let stem = Self::file_stem(label);
        let mut name = format!("{}.csv", stem);
        let mut n = 2;
        while !taken.insert(name.to_lowercase()) {
            name = format!("{}-{}.csv", stem, n);
            n += 1;
        }
        name
    }
}

impl SpreadsheetSink for CsvDirectorySink {
    fn write_workbook(&mut self, sheets: &[SheetSpec]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let mut taken = HashSet::new();
        for sheet in sheets {
            let path = self.dir.join(Self::file_name(&sheet.label, &mut taken));
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(&sheet.headers)?;
            for row in &sheet.rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
            log::info!("Wrote {} rows to {}", sheet.rows.len(), path.display());
            self.written.push(path);
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct WorkbookDocument<'a> {
    sheets: &'a [SheetSpec],
}

/// Writes the whole workbook as one JSON document: `{"sheets": [...]}`.
#[derive(Debug)]
pub struct JsonWorkbookSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonWorkbookSink<W> {
    /// Create a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SpreadsheetSink for JsonWorkbookSink<W> {
    fn write_workbook(&mut self, sheets: &[SheetSpec]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &WorkbookDocument { sheets })?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps written sheets in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Sheets received, across all writes
    pub sheets: Vec<SheetSpec>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpreadsheetSink for MemorySink {
    fn write_workbook(&mut self, sheets: &[SheetSpec]) -> Result<()> {
        self.sheets.extend_from_slice(sheets);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameRecord;

    fn sheet(label: &str) -> SheetSpec {
        let records = vec![
            NameRecord::new("Abad", "Rosa", None).unwrap(),
            NameRecord::new("Dela Cruz", "Juan Miguel", Some("Santos")).unwrap(),
        ];
        SheetSpec::from_records(label.to_string(), &records, 2)
    }

    #[test]
    fn test_csv_sink_writes_one_file_per_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvDirectorySink::new(dir.path().join("out"));
        sink.write_workbook(&[sheet("Section A"), sheet("b")]).unwrap();

        assert_eq!(sink.written().len(), 2);
        let text = std::fs::read_to_string(dir.path().join("out/Section A.csv")).unwrap();
        assert_eq!(
            text,
            "Last Name,First Name,Middle Initial\nAbad,Rosa,\nDela Cruz,Juan Miguel,S.\n"
        );
    }

    #[test]
    fn test_csv_file_name_replaces_path_characters() {
        let mut taken = HashSet::new();
        assert_eq!(CsvDirectorySink::file_name("a<b>|c", &mut taken), "a_b__c.csv");
    }

    #[test]
    fn test_labels_colliding_after_cleanup_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvDirectorySink::new(dir.path());
        sink.write_workbook(&[sheet("a<b"), sheet("a>b"), sheet("A|B")]).unwrap();

        let names: Vec<String> = sink
            .written()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_b.csv", "a_b-2.csv", "A_B-3.csv"]);

        let on_disk = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(on_disk, 3);
    }

    #[test]
    fn test_json_sink_single_document() {
        let mut sink = JsonWorkbookSink::new(Vec::new());
        sink.write_workbook(&[sheet("a")]).unwrap();
        let bytes = sink.into_inner();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["sheets"][0]["label"], "a");
        assert_eq!(value["sheets"][0]["rows"][1][2], "S.");
        assert_eq!(value["sheets"][0]["column_widths"][0], 11);
    }

    #[test]
    fn test_memory_sink_keeps_sheets() {
        let mut sink = MemorySink::new();
        sink.write_workbook(&[sheet("a")]).unwrap();
        assert_eq!(sink.sheets.len(), 1);
        assert_eq!(sink.sheets[0].rows.len(), 2);
    }
}
