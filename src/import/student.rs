//! Student roster schema and record.

use crate::import::mapper::FieldValue;
use crate::import::schema::FieldSpec;
use crate::import::schema::Schema;
use crate::import::ImportRecord;

/// Header synonyms and validation rules for student roster files.
pub const STUDENT_SCHEMA: Schema = Schema {
    entity: "student",
    fields: &[
        FieldSpec::required("Student ID", &["student id", "studentid", "id", "student_id"]),
        FieldSpec::required(
            "First Name",
            &["first name", "firstname", "first", "given name", "givenname"],
        ),
        FieldSpec::required(
            "Last Name",
            &["last name", "lastname", "last", "surname", "family name", "familyname"],
        ),
        FieldSpec::optional(
            "Middle Name",
            &["middle name", "middlename", "middle", "middle initial", "middleinitial", "mi"],
        ),
        FieldSpec::optional("Email", &["email", "e-mail", "email address", "emailaddress"]),
        FieldSpec::optional(
            "Course Code",
            &["course code", "coursecode", "course", "course name", "coursename"],
        ),
        FieldSpec::optional(
            "Year Level",
            &["year level", "yearlevel", "year", "level", "grade level", "gradelevel"],
        ),
        FieldSpec::optional("Section", &["section", "class", "section name", "sectionname"]),
        FieldSpec::optional(
            "Enrollment Year",
            &[
                "enrollment year",
                "enrollmentyear",
                "academic year",
                "academicyear",
                "school year",
                "schoolyear",
            ],
        ),
        FieldSpec::optional(
            "Phone Number",
            &["phone number", "phonenumber", "phone", "mobile", "contact number", "contactnumber"],
        ),
        FieldSpec::optional(
            "Date of Birth",
            &["date of birth", "dateofbirth", "dob", "birthdate", "birth date"],
        ),
        FieldSpec::optional("Address", &["address", "home address", "homeaddress", "residence"]),
    ],
};

/// One accepted student row.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentRecord {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: Option<String>,
    pub course_code: Option<String>,
    pub year_level: Option<String>,
    pub section: Option<String>,
    pub enrollment_year: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
}

impl ImportRecord for StudentRecord {
    fn schema() -> &'static Schema {
        &STUDENT_SCHEMA
    }

    fn from_values(values: &mut [FieldValue]) -> Self {
        StudentRecord {
            student_id: values[0].take_text().unwrap_or_default(),
            first_name: values[1].take_text().unwrap_or_default(),
            last_name: values[2].take_text().unwrap_or_default(),
            middle_name: values[3].take_text(),
            email: values[4].take_text(),
            course_code: values[5].take_text(),
            year_level: values[6].take_text(),
            section: values[7].take_text(),
            enrollment_year: values[8].take_text(),
            phone_number: values[9].take_text(),
            date_of_birth: values[10].take_text(),
            address: values[11].take_text(),
        }
    }
}
