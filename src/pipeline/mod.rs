//! Name extraction pipeline.
//!
//! ```text
//! TextSource (pages)
//!     ↓ str::lines
//! raw line
//!     ↓
//! [NoiseFilter] (blank / no letters / stopword)
//!     ↓
//! [LineNormalizer] (prefix, digits, symbols)
//!     ↓
//! [NameParser] + [SuffixSet]
//!     ↓
//! [RecordAggregator] (stable sort by last name)
//!     ↓
//! DocumentResult
//! ```
//!
//! The noise filter sees the raw line so stopword phrases are matched before
//! cleanup can break them apart. A [`NamePipeline`] holds only immutable
//! configuration; every call builds its own results.

pub mod aggregate;
pub mod batch;

pub use aggregate::{sort_records, DocumentResult, DocumentStats, RecordAggregator};
pub use batch::{BatchOutcome, DocumentFailure};

use crate::config::{ExtractionConfig, SheetOptions};
use crate::error::Result;
use crate::names::{NameParser, NameRecord, SuffixSet};
use crate::source::TextSource;
use crate::text::{LineNormalizer, NoiseFilter, NoiseReason, StopwordSet};

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Rejected before normalization
    Noise(NoiseReason),
    /// Nothing left after normalization
    Emptied,
    /// Clean text that is not a name
    NoRecord,
    /// A parsed name
    Record(NameRecord),
}

/// The line-to-records pipeline, built once from configuration.
#[derive(Debug, Clone)]
pub struct NamePipeline {
    filter: NoiseFilter,
    normalizer: LineNormalizer,
    parser: NameParser,
    sheet_options: SheetOptions,
}

impl NamePipeline {
    /// Build a pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::error::Error::Config) for invalid configuration.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        config.validate()?;
        let filter = NoiseFilter::new(StopwordSet::new(&config.stopwords));
        let normalizer = LineNormalizer::new(&config.extra_name_letters)?;
        let parser = NameParser::new(SuffixSet::new(&config.suffixes), config.parse_mode);

        log::debug!(
            "Name pipeline: {} stopwords, {} suffixes, {:?}",
            filter.stopwords().len(),
            config.suffixes.len(),
            config.parse_mode
        );

        Ok(Self {
            filter,
            normalizer,
            parser,
            sheet_options: config.sheets.clone(),
        })
    }

    /// Build a pipeline with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ExtractionConfig::default())
    }

    /// Sheet options carried from the configuration.
    pub fn sheet_options(&self) -> &SheetOptions {
        &self.sheet_options
    }

    /// Run one raw line through filter, normalizer and parser.
    pub fn classify_line(&self, raw: &str) -> LineOutcome {
        if let Some(reason) = self.filter.classify(raw) {
            return LineOutcome::Noise(reason);
        }
        let cleaned = self.normalizer.normalize(raw);
        if cleaned.is_empty() {
            return LineOutcome::Emptied;
        }
        match self.parser.parse(&cleaned) {
            Some(record) => LineOutcome::Record(record),
            None => LineOutcome::NoRecord,
        }
    }

    /// Parse one document's lines. Never fails.
    pub fn parse_document<I, S>(&self, source_name: &str, lines: I) -> DocumentResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aggregator = RecordAggregator::new();
        let mut stats = DocumentStats::default();
        self.consume_lines(lines, &mut aggregator, &mut stats);
        self.finish(source_name, aggregator, stats)
    }

    /// Parse a document given as page texts. Never fails.
    pub fn parse_pages<I, S>(&self, source_name: &str, pages: I) -> DocumentResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aggregator = RecordAggregator::new();
        let mut stats = DocumentStats::default();
        for page in pages {
            stats.pages += 1;
            self.consume_lines(page.as_ref().lines(), &mut aggregator, &mut stats);
        }
        self.finish(source_name, aggregator, stats)
    }

    /// Pull every page from a source and parse it.
    ///
    /// A failure on any page fails the whole document; records from earlier
    /// pages are dropped with it.
    pub fn extract_document<T: TextSource + ?Sized>(&self, source: &T) -> Result<DocumentResult> {
        let name = source.name();
        log::info!("Extracting names from {}", name);

        let mut aggregator = RecordAggregator::new();
        let mut stats = DocumentStats::default();
        for page in source.pages()? {
            let page = page?;
            stats.pages += 1;
            self.consume_lines(page.lines(), &mut aggregator, &mut stats);
        }
        Ok(self.finish(name, aggregator, stats))
    }

    fn consume_lines<I, S>(
        &self,
        lines: I,
        aggregator: &mut RecordAggregator,
        stats: &mut DocumentStats,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();
            stats.lines += 1;
            match self.classify_line(line) {
                LineOutcome::Noise(reason) => {
                    stats.noise += 1;
                    log::trace!("noise ({:?}): {:?}", reason, line);
                },
                LineOutcome::Emptied => stats.emptied += 1,
                LineOutcome::NoRecord => {
                    stats.unparsed += 1;
                    log::trace!("no name in: {:?}", line);
                },
                LineOutcome::Record(record) => {
                    stats.records += 1;
                    aggregator.push(record);
                },
            }
        }
    }

    fn finish(
        &self,
        source_name: &str,
        aggregator: RecordAggregator,
        stats: DocumentStats,
    ) -> DocumentResult {
        log::debug!(
            "{}: {} lines, {} noise, {} emptied, {} unparsed, {} names",
            source_name,
            stats.lines,
            stats.noise,
            stats.emptied,
            stats.unparsed,
            stats.records
        );
        aggregator.finish(source_name, stats)
    }
}
