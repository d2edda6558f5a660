//! Extract names from rosters into spreadsheet sheets.
//!
//! Usage:
//!   roster_extract scans/*.png lists/section_b.txt -o sheets/
//!   roster_extract roster.pdf --format json -o names.json
//!   RUST_LOG=debug roster_extract --allow-no-comma --combined scan.jpg
//!
//! Each input becomes one sheet. Inputs that fail extraction are reported and
//! skipped; the run fails only when no input yields a name.

use clap::{Parser, ValueEnum};
use roster_oxide::source::{is_tesseract_available, InputKind};
use roster_oxide::{
    open_source, BatchOutcome, CsvDirectorySink, EmptyDocumentPolicy, Error, ExtractionConfig,
    JsonWorkbookSink, NamePipeline, OutputLayout, ParseMode, SourceOptions, SpreadsheetSink,
    Workbook,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One CSV file per sheet in the output directory
    Csv,
    /// One JSON workbook document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "roster_extract")]
#[command(about = "Extract names from rosters into sheets", long_about = None)]
struct Cli {
    /// Input documents: text files, images (png, jpg, jpeg, bmp, tif, tiff) or PDFs
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (csv) or file (json); json defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// JSON configuration file (stopwords, suffixes, sheet options)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also read "Lastname Firstname Middlename" lines without a comma
    #[arg(long)]
    allow_no_comma: bool,

    /// Put every name in one sheet instead of one sheet per input
    #[arg(long)]
    combined: bool,

    /// Leave inputs without names out of the workbook
    #[arg(long)]
    skip_empty: bool,

    /// Tesseract language code
    #[arg(long, default_value = "eng")]
    ocr_lang: String,

    /// Do not OCR PDFs that have no extractable text
    #[arg(long)]
    no_ocr_fallback: bool,
}

impl Cli {
    fn extraction_config(&self) -> roster_oxide::Result<ExtractionConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractionConfig::from_json_file(path)?,
            None => ExtractionConfig::default(),
        };
        if self.allow_no_comma {
            config = config.with_parse_mode(ParseMode::AllowFallback);
        }
        if self.combined {
            config = config.with_layout(OutputLayout::Combined);
        }
        if self.skip_empty {
            config = config.with_empty_documents(EmptyDocumentPolicy::Skip);
        }
        Ok(config)
    }

    fn source_options(&self) -> SourceOptions {
        SourceOptions {
            ocr_language: self.ocr_lang.clone(),
            ocr_fallback: !self.no_ocr_fallback,
            ..SourceOptions::default()
        }
    }
}

fn write_workbook(cli: &Cli, workbook: &Workbook) -> roster_oxide::Result<()> {
    match cli.format {
        OutputFormat::Csv => {
            let dir = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("roster_sheets"));
            let mut sink = CsvDirectorySink::new(&dir);
            sink.write_workbook(&workbook.sheets)?;
            eprintln!("Sheets written to: {}", dir.display());
        },
        OutputFormat::Json => match &cli.output {
            Some(path) => {
                let file = BufWriter::new(File::create(path)?);
                JsonWorkbookSink::new(file).write_workbook(&workbook.sheets)?;
                eprintln!("Workbook written to: {}", path.display());
            },
            None => {
                JsonWorkbookSink::new(io::stdout().lock()).write_workbook(&workbook.sheets)?;
            },
        },
    }
    Ok(())
}

fn run(cli: &Cli) -> roster_oxide::Result<()> {
    let config = cli.extraction_config()?;
    let pipeline = NamePipeline::new(&config)?;
    let source_options = cli.source_options();

    let needs_ocr = cli.inputs.iter().any(|path| {
        matches!(
            InputKind::from_path(path),
            Ok(InputKind::Image) | Ok(InputKind::Pdf)
        )
    });
    if needs_ocr && !is_tesseract_available() {
        eprintln!("⚠ tesseract not found on PATH; image and scanned PDF inputs will fail");
    }

    let mut outcome = BatchOutcome::new();
    for path in &cli.inputs {
        match open_source(path, &source_options) {
            Ok(source) => {
                let result = pipeline.extract_document(&source);
                outcome.record(source.name(), result);
            },
            Err(e) => outcome.push_failure(path.display().to_string(), e),
        }
    }

    let workbook = outcome.into_workbook(pipeline.sheet_options())?;

    for failure in &workbook.failures {
        eprintln!("✗ {}: {}", failure.source_name, failure.error);
    }
    for name in &workbook.empty_documents {
        eprintln!("⚠ {}: no names found", name);
    }
    let rows: usize = workbook.sheets.iter().map(|s| s.rows.len()).sum();
    eprintln!("✓ {} names in {} sheets", rows, workbook.sheets.len());

    write_workbook(cli, &workbook)
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::NoValidDocuments { .. }) => {
            eprintln!("No names could be extracted: {}", e);
            ExitCode::from(2)
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
