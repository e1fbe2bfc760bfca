//! vlanscan-core: extract VLAN definitions from spreadsheet worksheets
//!
//! Every row of every sheet is scanned for a `vlan <id> description <text>`
//! run of cells. Matches are collected in sheet/row order and can be written
//! out as CSV.

pub mod config;
pub mod error;
pub mod reader;
pub mod record;
pub mod scanner;
pub mod writer;

use std::path::Path;
use tracing::{debug, info, warn};

pub use config::{ExtractConfig, OutputConfig, ScanConfig};
pub use error::ExtractError;
pub use reader::{CalamineSource, Row, Rows, SheetSource};
pub use record::VlanRecord;
pub use scanner::{RowScanner, slugify};

/// A sheet whose rows could not be read
#[derive(Debug)]
pub struct SheetFailure {
    pub sheet: String,
    pub error: anyhow::Error,
}

/// Result of scanning one workbook
#[derive(Debug, Default)]
pub struct Extraction {
    /// Detected records in sheet, row and column order
    pub records: Vec<VlanRecord>,
    /// Sheets skipped because their rows could not be read
    pub failures: Vec<SheetFailure>,
    pub sheets_scanned: usize,
    pub rows_scanned: usize,
}

/// Main extraction interface
pub struct Extractor {
    config: ExtractConfig,
    scanner: RowScanner,
}

impl Extractor {
    /// Create an extractor with default configuration
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    /// Create an extractor with custom configuration
    pub fn with_config(config: ExtractConfig) -> Self {
        let scanner = RowScanner::new(&config.scan, config.output.slug);
        Self { config, scanner }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Open the workbook at `path` and scan all of its sheets
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction, ExtractError> {
        let mut source = CalamineSource::open(path)?;
        Ok(self.extract(&mut source))
    }

    /// Scan every sheet of `source`. Unreadable sheets are skipped.
    pub fn extract<S: SheetSource + ?Sized>(&self, source: &mut S) -> Extraction {
        let mut extraction = Extraction::default();

        for sheet in source.sheet_names() {
            let rows = match source.rows(&sheet) {
                Ok(rows) => rows,
                Err(error) => {
                    warn!(sheet = %sheet, error = %error, "skipping unreadable sheet");
                    extraction.failures.push(SheetFailure { sheet, error });
                    continue;
                }
            };

            let found_before = extraction.records.len();
            let mut row_count = 0;
            for row in rows {
                row_count += 1;
                extraction.records.extend(self.scanner.scan_row(&row));
            }

            debug!(
                sheet = %sheet,
                rows = row_count,
                records = extraction.records.len() - found_before,
                "scanned sheet"
            );
            extraction.sheets_scanned += 1;
            extraction.rows_scanned += row_count;
        }

        info!(
            sheets = extraction.sheets_scanned,
            skipped = extraction.failures.len(),
            rows = extraction.rows_scanned,
            records = extraction.records.len(),
            "extraction finished"
        );
        extraction
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
