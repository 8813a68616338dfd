//! Grade-sheet schema and record.
//!
//! Grade files key rows by student name; the three term scores are optional
//! and stay absent when blank rather than defaulting to zero, so a missing
//! midterm never averages as 0.

use crate::import::mapper::FieldValue;
use crate::import::schema::FieldSpec;
use crate::import::schema::Schema;
use crate::import::ImportRecord;

/// Header synonyms and validation rules for grade files.
pub const GRADE_SCHEMA: Schema = Schema {
    entity: "grade",
    fields: &[
        FieldSpec::required("Student Name", &["student name", "studentname", "name", "student"]),
        FieldSpec::score("Prelim grade", &["prelim", "preliminary", "prelim grade", "prelimgrade"]),
        FieldSpec::score("Midterm grade", &["midterm", "midterm grade", "midtermgrade"]),
        FieldSpec::score("Final grade", &["final", "final grade", "finalgrade"]),
    ],
};

/// One accepted grade row.
#[derive(Clone, Debug, PartialEq)]
pub struct GradeRecord {
    pub student_name: String,
    pub prelim: Option<f64>,
    pub midterm: Option<f64>,
    pub final_grade: Option<f64>,
}

impl ImportRecord for GradeRecord {
    fn schema() -> &'static Schema {
        &GRADE_SCHEMA
    }

    fn from_values(values: &mut [FieldValue]) -> Self {
        GradeRecord {
            student_name: values[0].take_text().unwrap_or_default(),
            prelim: values[1].take_number(),
            midterm: values[2].take_number(),
            final_grade: values[3].take_number(),
        }
    }
}
