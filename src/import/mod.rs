//! # Entity import
//!
//! The header-driven half of the pipeline: entity schemas, the generic row
//! mapper, and the two entry points (workbook and delimited text). The
//! pipeline returns data; persisting accepted records and presenting
//! rejections are the caller's concern.

pub(crate) mod delimited;
pub(crate) mod grade;
pub(crate) mod mapper;
pub(crate) mod schema;
pub(crate) mod student;
pub(crate) mod teacher;

use crate::error::ImportError;
use crate::import::mapper::FieldValue;
use crate::import::schema::Schema;
use std::io::Read;
use std::io::Seek;

/// Outcome of one import call: accepted typed records plus human-readable
/// per-row rejection messages. Owned solely by the caller.
#[derive(Clone, Debug, Default)]
pub struct Import<T> {
    pub records: Vec<T>,
    pub rejections: Vec<String>,
}

/// A typed row produced by the mapper. Implemented by the entity records;
/// each implementation is just its schema plus positional field extraction.
pub trait ImportRecord: Sized {
    /// The schema driving column resolution and row validation.
    fn schema() -> &'static Schema;

    /// Builds the record from validated values, index-aligned to the
    /// schema's field list. Required fields are guaranteed present.
    fn from_values(values: &mut [FieldValue]) -> Self;
}

/// Imports entity rows from a zipped-XML workbook byte stream.
///
/// # Errors
///
/// `MalformedContainer` when the stream is not a valid archive;
/// `EmptyInput` when there is no readable worksheet data;
/// `MissingRequiredColumns` when the header resolves no column for one or
/// more required fields; `NoRowsAccepted` when every data row was rejected.
pub fn read_workbook<T, RS>(reader: RS) -> Result<Import<T>, ImportError>
where
    T: ImportRecord,
    RS: Read + Seek,
{
    let grid = crate::sheet::read_grid(reader)?;
    mapper::map_grid(&grid)
}

/// Imports entity rows from a delimited-text byte stream with a header line.
///
/// # Errors
///
/// As [`read_workbook`], with `MalformedText` in place of
/// `MalformedContainer`.
pub fn read_delimited<T, R>(reader: R) -> Result<Import<T>, ImportError>
where
    T: ImportRecord,
    R: Read,
{
    let grid = delimited::read_grid(reader)?;
    mapper::map_grid(&grid)
}
