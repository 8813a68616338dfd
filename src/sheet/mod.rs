//! # Workbook decoding
//!
//! Streaming extraction of a dense row grid from a zipped-XML workbook:
//! container walk, shared-string table, then the first worksheet. The stages
//! are strictly sequential because worksheet cells resolve against the fully
//! built shared-string table. One call, one grid; nothing persists across
//! calls.

pub(crate) mod grid;
pub(crate) mod reference;
pub(crate) mod shared_strings;

use crate::error::ImportError;
use crate::helpers::zip::WorkbookArchive;
use std::io::Read;
use std::io::Seek;

/// Reads the first worksheet of a workbook byte stream into a dense grid of
/// string cell values.
///
/// A missing shared-string entry (or one that fails to decode) yields an
/// empty table: some writers inline every value. A missing worksheet entry
/// yields an empty grid, left for the caller to report. A worksheet that is
/// present but structurally unreadable fails with [`ImportError::EmptyInput`].
pub(crate) fn read_grid<RS: Read + Seek>(reader: RS) -> Result<Vec<Vec<String>>, ImportError> {
    let mut archive = WorkbookArchive::open(reader)?;

    let shared_strings = match archive.shared_strings_reader()? {
        Some(mut reader) => match shared_strings::decode(&mut reader) {
            Ok(strings) => strings,
            Err(error) => {
                log::warn!("Shared-string table unreadable, continuing without it: {error}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let grid = match archive.worksheet_reader()? {
        Some(mut reader) => match grid::decode(&mut reader, &shared_strings) {
            Ok(grid) => Ok(grid),
            Err(
                error @ (ImportError::XmlError(_)
                | ImportError::XmlEncodingError(_)
                | ImportError::XmlAttributeError(_)),
            ) => {
                log::warn!("Worksheet decode failed: {error}");
                Err(ImportError::EmptyInput)
            }
            Err(error) => Err(error),
        },
        None => Ok(Vec::new()),
    };
    grid
}
