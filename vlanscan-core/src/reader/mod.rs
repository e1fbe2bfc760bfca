//! Worksheet row sources
//!
//! The scanner only needs sheet names and rows of plain text cells, so file
//! decoding sits behind [`SheetSource`]. [`CalamineSource`] covers every format
//! calamine can open.

use crate::error::ExtractError;
use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A row of cell values, stripped of type and formatting
pub type Row = Vec<String>;

/// Lazy sequence of rows for one sheet
pub type Rows<'a> = Box<dyn Iterator<Item = Row> + 'a>;

/// Provider of sheets and their rows
pub trait SheetSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Rows of `sheet`, top to bottom
    fn rows(&mut self, sheet: &str) -> Result<Rows<'_>>;
}

/// Workbook opened through calamine (xlsx, xlsm, xlsb, xls, ods)
pub struct CalamineSource {
    workbook: Sheets<BufReader<File>>,
}

impl CalamineSource {
    /// Open a workbook, detecting the format from the file extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let workbook = open_workbook_auto(path).map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { workbook })
    }
}

impl SheetSource for CalamineSource {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn rows(&mut self, sheet: &str) -> Result<Rows<'_>> {
        let range = self
            .workbook
            .worksheet_range(sheet)
            .with_context(|| format!("Failed to read rows of sheet '{}'", sheet))?;
        Ok(Box::new(RangeRows { range, next: 0 }))
    }
}

/// Owns a sheet's used range and yields it one row at a time
struct RangeRows {
    range: Range<Data>,
    next: usize,
}

impl Iterator for RangeRows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.range.height() {
            return None;
        }
        let row = self.next;
        self.next += 1;

        let cells = (0..self.range.width())
            .map(|col| {
                self.range
                    .get((row, col))
                    .map(cell_text)
                    .unwrap_or_default()
            })
            .collect();
        Some(cells)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.height().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

/// Render a cell the way it reads in the sheet, without type information
fn cell_text(data: &Data) -> String {
    match data {
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.clone(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
