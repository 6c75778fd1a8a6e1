//! CSV load and store for the three tables of the pipeline stage.
//!
//! Input requires the `Readable_Term` and `Label` columns; extra columns
//! from the upstream stage are ignored. Outputs are written with a UTF-8
//! byte-order mark so spreadsheet tools open the accented geology terms
//! correctly. The success table is written unconditionally (header-only
//! when empty); the review table only when at least one row exists.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::NldError;
use crate::record::{ReviewRecord, SuccessRecord, TermRecord};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

const REQUIRED_COLUMNS: [&str; 2] = ["Readable_Term", "Label"];
const SUCCESS_COLUMNS: [&str; 3] = ["Corrected_Term", "NLD", "Original_Label"];

/// Load term records from the input CSV.
///
/// A missing file or a missing required column is a fatal load error;
/// no partial or degraded load is attempted.
pub fn load_term_records(path: &Path) -> Result<Vec<TermRecord>, NldError> {
    if !path.exists() {
        return Err(NldError::InputNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(NldError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Write the success table. Always produces a file, header-only when no
/// record succeeded.
pub fn write_success_table(path: &Path, records: &[SuccessRecord]) -> Result<(), NldError> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(UTF8_BOM)?;
    let mut writer = csv::Writer::from_writer(file);
    if records.is_empty() {
        writer.write_record(SUCCESS_COLUMNS)?;
    } else {
        for record in records {
            writer.serialize(record)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write the review table if there is anything to review.
/// Returns whether a file was written.
pub fn write_review_table(path: &Path, records: &[ReviewRecord]) -> Result<bool, NldError> {
    if records.is_empty() {
        return Ok(false);
    }

    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(UTF8_BOM)?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(true)
}
