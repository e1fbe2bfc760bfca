//! CSV output for extracted records

use crate::error::ExtractError;
use crate::record::{VlanRecord, header};
use std::io;
use std::path::Path;

/// Write `records` to `path`, truncating any existing file.
///
/// Stops at the first failing record; rows written before it stay on disk.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    records: &[VlanRecord],
    with_slug: bool,
) -> Result<(), ExtractError> {
    let path = path.as_ref();
    let wtr = builder()
        .from_path(path)
        .map_err(|source| ExtractError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    write_records(wtr, records, with_slug)
}

/// Same encoding as [`write_csv`], into any sink
pub fn write_csv_to<W: io::Write>(
    sink: W,
    records: &[VlanRecord],
    with_slug: bool,
) -> Result<(), ExtractError> {
    write_records(builder().from_writer(sink), records, with_slug)
}

fn builder() -> csv::WriterBuilder {
    // Quote only fields containing a delimiter, quote or newline
    let mut builder = csv::WriterBuilder::new();
    builder.quote_style(csv::QuoteStyle::Necessary);
    builder
}

fn write_records<W: io::Write>(
    mut wtr: csv::Writer<W>,
    records: &[VlanRecord],
    with_slug: bool,
) -> Result<(), ExtractError> {
    wtr.write_record(header(with_slug))
        .map_err(|source| ExtractError::Write { record: 0, source })?;

    for (index, record) in records.iter().enumerate() {
        wtr.write_record(record.fields(with_slug))
            .map_err(|source| ExtractError::Write {
                record: index + 1,
                source,
            })?;
    }

    wtr.flush()?;
    Ok(())
}
