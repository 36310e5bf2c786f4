//! Ledger CSV files.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use opex_core::TransactionRecord;
use opex_core::record::{Schema, columns};
use tracing::{debug, info};

use crate::error::SourceError;

/// Column order used when writing a ledger.
const WRITE_HEADERS: [&str; 7] = [
    columns::DATE,
    columns::DEPARTMENT,
    columns::EXPENSE_TYPE,
    columns::VENDOR,
    columns::DESCRIPTION,
    columns::BUDGETED_AMOUNT,
    columns::ACTUAL_AMOUNT,
];

/// Reads a ledger CSV file.
///
/// # Errors
///
/// Fails on I/O or CSV framing errors, a missing required column, or the
/// first row holding a bad date or amount. No partial result is returned.
pub fn read_records(path: &Path) -> Result<Vec<TransactionRecord>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(file)?;
    info!(path = %path.display(), records = records.len(), "Ledger loaded");
    Ok(records)
}

/// Parses a headered ledger CSV from any reader.
///
/// Extra columns are ignored. Data lines are numbered from 1 in errors.
///
/// # Errors
///
/// See [`read_records`].
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let schema = Schema::resolve(&headers)?;
    debug!(columns = headers.len(), "Ledger header resolved");

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let fields: Vec<&str> = row.iter().collect();
        records.push(schema.parse_row(&fields, idx + 1)?);
    }

    Ok(records)
}

/// Writes records as a ledger CSV file, replacing any existing file.
///
/// Dates are written as `YYYY-MM-DD` and amounts in plain decimal notation,
/// so [`read_records`] yields equal records.
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn write_records(path: &Path, records: &[TransactionRecord]) -> Result<(), SourceError> {
    let io_err = |source: std::io::Error| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    to_writer(file, records)?.flush().map_err(io_err)?;

    info!(path = %path.display(), records = records.len(), "Ledger written");
    Ok(())
}

fn to_writer<W: Write>(writer: W, records: &[TransactionRecord]) -> Result<W, SourceError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(WRITE_HEADERS)?;

    for record in records {
        let date = record.date.format("%Y-%m-%d").to_string();
        let budgeted = record.budgeted_amount.to_string();
        let actual = record.actual_amount.to_string();
        writer.write_record([
            date.as_str(),
            record.department.as_str(),
            record.expense_type.as_deref().unwrap_or(""),
            record.vendor.as_str(),
            record.description.as_str(),
            budgeted.as_str(),
            actual.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| SourceError::Csv(csv::Error::from(err.into_error())))
}
