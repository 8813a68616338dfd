use thiserror::Error;

/// Maximum number of rejection messages carried by a file-level failure.
pub const REJECTION_REPORT_LIMIT: usize = 10;

/// Main error type for the import pipeline.
/// File-level failures abort the whole import; per-row failures are not
/// errors and accumulate as rejection strings instead.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The byte stream could not be opened as a ZIP-compatible archive.
    #[error("File is not a valid spreadsheet archive: {0}")]
    MalformedContainer(#[from] zip::result::ZipError),

    /// The byte stream could not be read as delimited text.
    #[error("File is not valid delimited text: {0}")]
    MalformedText(#[from] csv::Error),

    /// One or more required fields have no resolvable header column.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingRequiredColumns(Vec<String>),

    /// No header row, zero data rows, or a structurally unreadable worksheet.
    #[error("File has no readable data")]
    EmptyInput,

    /// Every data row was rejected; carries at most the first
    /// [`REJECTION_REPORT_LIMIT`] rejection messages.
    #[error("No rows could be imported:\n{}", .0.join("\n"))]
    NoRowsAccepted(Vec<String>),

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("{0}")]
    XmlEncodingError(#[from] quick_xml::encoding::EncodingError),

    #[error("{0}")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),
}
