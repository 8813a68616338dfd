//! # Roster Import
//!
//! A tabular-import pipeline for bulk onboarding into an academic-records
//! system. It ingests externally authored spreadsheet files, either a
//! zipped-XML workbook (XLSX) or delimited text (CSV), and produces a
//! validated, typed sequence of entity rows: students, teachers, or grades.
//!
//! ## Pipeline
//!
//! 1. **Container reader** — walks the workbook archive and streams the
//!    shared-string and first-worksheet entries.
//! 2. **Shared-string decoder** — builds the ordered string table.
//! 3. **Worksheet grid decoder** — reconstructs a dense, row-major grid of
//!    string cell values from the sparse worksheet XML.
//! 4. **Header-driven row mapper** — resolves columns through per-entity
//!    synonym sets, validates rows, and emits typed records plus per-row
//!    rejection messages.
//!
//! Row-level problems do not abort the file: a 500-row import with 3 bad
//! rows still yields 497 records and exactly 3 rejection reasons. Formulas,
//! styles, merged cells, and sheets beyond the first are never interpreted;
//! only literal cell values are recovered.
//!
//! ## Example
//!
//! ```no_run
//! use roster_import::{read_workbook, StudentRecord};
//! use std::fs::File;
//!
//! # fn main() -> Result<(), roster_import::ImportError> {
//! let file = File::open("students.xlsx")?;
//! let import = read_workbook::<StudentRecord, _>(file)?;
//! println!("{} accepted, {} rejected", import.records.len(), import.rejections.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod helpers;
mod import;
mod sheet;

pub use crate::error::ImportError;
pub use crate::error::REJECTION_REPORT_LIMIT;
pub use crate::import::grade::GradeRecord;
pub use crate::import::grade::GRADE_SCHEMA;
pub use crate::import::mapper::FieldValue;
pub use crate::import::read_delimited;
pub use crate::import::read_workbook;
pub use crate::import::schema::FieldSpec;
pub use crate::import::schema::Schema;
pub use crate::import::student::StudentRecord;
pub use crate::import::student::STUDENT_SCHEMA;
pub use crate::import::teacher::TeacherRecord;
pub use crate::import::teacher::TEACHER_SCHEMA;
pub use crate::import::Import;
pub use crate::import::ImportRecord;
