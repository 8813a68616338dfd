//! Delimited-text (CSV) variant of the grid source.
//!
//! A thin wrapper over a conventional record reader: the header line becomes
//! the grid's first row and the mapper applies the same column-matching
//! contract as the workbook path. Quoting follows the reader's standard
//! rules; per-cell trimming is the mapper's job.

use crate::error::ImportError;
use std::io::Read;

/// Reads a delimited-text stream into a dense row grid.
/// Ragged rows are allowed; the mapper treats short rows as trailing blanks.
pub(crate) fn read_grid<R: Read>(reader: R) -> Result<Vec<Vec<String>>, ImportError> {
    let csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut grid = Vec::<Vec<String>>::new();
    for result in csv_reader.into_records() {
        let record = result?;
        grid.push(record.iter().map(|value| value.to_owned()).collect());
    }
    log::debug!("Read {} delimited rows", grid.len());
    Ok(grid)
}
