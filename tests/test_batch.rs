//! Integration tests for multi-document batches and workbook output.

use roster_oxide::source::{Pages, PlainTextSource};
use roster_oxide::{
    CsvDirectorySink, Error, ExtractionConfig, JsonWorkbookSink, MemorySink, MemorySource,
    NamePipeline, OutputLayout, Result, SpreadsheetSink, TextSource,
};
use std::fs;

/// A document whose text cannot be recovered.
struct Unreadable(&'static str);

impl TextSource for Unreadable {
    fn name(&self) -> &str {
        self.0
    }

    fn pages(&self) -> Result<Pages<'_>> {
        Err(Error::extraction(self.0, "image could not be decoded"))
    }
}

fn pipeline() -> NamePipeline {
    NamePipeline::with_defaults().unwrap()
}

fn section_a() -> MemorySource {
    MemorySource::from_lines(
        "section_a.png",
        [
            "STUDENT LIST",
            "1. Santos, Pedro Jr.",
            "2. Abad, Rosa Lim",
            "3. Dela Cruz, Juan Miguel Santos",
        ],
    )
}

#[test]
fn test_one_failure_among_valid_documents() {
    let sources: Vec<Box<dyn TextSource>> =
        vec![Box::new(section_a()), Box::new(Unreadable("section_b.png"))];

    let workbook = pipeline().build_workbook(sources).unwrap();

    assert_eq!(workbook.sheets.len(), 1);
    let sheet = &workbook.sheets[0];
    assert_eq!(sheet.label, "section_a");
    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(sheet.rows[0][0], "Abad");
    assert_eq!(sheet.rows[2], ["Santos", "Pedro", ""].map(String::from));

    assert_eq!(workbook.failures.len(), 1);
    assert_eq!(workbook.failures[0].source_name, "section_b.png");
    assert!(matches!(workbook.failures[0].error, Error::Extraction { .. }));
}

#[test]
fn test_all_documents_failing_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sheets");

    let result = pipeline().build_workbook([Unreadable("a.png"), Unreadable("b.png")]);
    match result {
        Err(Error::NoValidDocuments { attempted, failed }) => {
            assert_eq!(attempted, 2);
            assert_eq!(failed, 2);
        },
        other => panic!("expected NoValidDocuments, got {:?}", other.map(|w| w.sheets)),
    }

    // The sink is never reached, so the output directory does not exist.
    assert!(!out.exists());
}

#[test]
fn test_missing_files_reported_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.txt");
    fs::write(&present, "Cruz, Juan\nAbad, Rosa\n").unwrap();

    let outcome = pipeline().process_batch([
        PlainTextSource::new(&present),
        PlainTextSource::new(dir.path().join("missing.txt")),
    ]);
    assert_eq!(outcome.attempted(), 2);
    assert_eq!(outcome.failures()[0].source_name, "missing.txt");
    assert_eq!(outcome.total_records(), 2);
}

#[test]
fn test_combined_layout_from_configuration() {
    let config = ExtractionConfig::from_json_str(
        r#"{ "sheets": { "layout": "combined", "default_sheet_label": "All Sections" } }"#,
    )
    .unwrap();
    assert_eq!(config.sheets.layout, OutputLayout::Combined);

    let p = NamePipeline::new(&config).unwrap();
    let workbook = p
        .build_workbook([
            section_a(),
            MemorySource::from_lines("section_b.png", ["Bautista, Carlo", "abella, Mia"]),
        ])
        .unwrap();

    assert_eq!(workbook.sheets.len(), 1);
    assert_eq!(workbook.sheets[0].label, "All Sections");
    let lasts: Vec<&str> = workbook.sheets[0]
        .rows
        .iter()
        .map(|r| r[0].as_str())
        .collect();
    assert_eq!(lasts, vec!["Abad", "abella", "Bautista", "Dela Cruz", "Santos"]);
}

#[test]
fn test_csv_directory_output() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = pipeline()
        .build_workbook([
            section_a(),
            MemorySource::from_lines("empty.png", ["--- 1 ---"]),
        ])
        .unwrap();
    assert_eq!(workbook.empty_documents, vec!["empty.png".to_string()]);

    let mut sink = CsvDirectorySink::new(dir.path());
    sink.write_workbook(&workbook.sheets).unwrap();
    assert_eq!(sink.written().len(), 2);

    let text = fs::read_to_string(dir.path().join("section_a.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Last Name,First Name,Middle Initial");
    assert_eq!(lines[1], "Abad,Rosa,L.");
    assert_eq!(lines[2], "Dela Cruz,Juan Miguel,S.");

    let empty = fs::read_to_string(dir.path().join("empty.csv")).unwrap();
    assert_eq!(empty, "Last Name,First Name,Middle Initial\n");
}

#[test]
fn test_json_workbook_output() {
    let workbook = pipeline().build_workbook([section_a()]).unwrap();

    let mut sink = JsonWorkbookSink::new(Vec::new());
    sink.write_workbook(&workbook.sheets).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();

    let sheet = &value["sheets"][0];
    assert_eq!(sheet["label"], "section_a");
    assert_eq!(sheet["headers"][2], "Middle Initial");
    assert_eq!(sheet["rows"].as_array().unwrap().len(), 3);
    // "Juan Miguel" is the widest first-name cell: 11 + 2 padding.
    assert_eq!(sheet["column_widths"][1], 13);
}

#[test]
fn test_memory_sink_collects_sheets() {
    let workbook = pipeline()
        .build_workbook([
            MemorySource::from_lines("list.txt", ["Abad, Rosa"]),
            MemorySource::from_lines("LIST.png", ["Cruz, Juan"]),
        ])
        .unwrap();

    let mut sink = MemorySink::new();
    sink.write_workbook(&workbook.sheets).unwrap();
    let labels: Vec<&str> = sink.sheets.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["list", "LIST (2)"]);
}
