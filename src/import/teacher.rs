//! Teacher roster schema and record.

use crate::import::mapper::FieldValue;
use crate::import::schema::FieldSpec;
use crate::import::schema::Schema;
use crate::import::ImportRecord;

/// Header synonyms and validation rules for teacher roster files.
pub const TEACHER_SCHEMA: Schema = Schema {
    entity: "teacher",
    fields: &[
        FieldSpec::required(
            "Teacher ID",
            &["teacher id", "teacherid", "id", "employee id", "employeeid"],
        ),
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
            &["middle name", "middlename", "middle", "middle initial", "mi"],
        ),
        FieldSpec::optional("Email", &["email", "e-mail", "email address"]),
        FieldSpec::optional(
            "Department",
            &["department", "departmentcode", "course code", "course", "department name"],
        ),
        FieldSpec::optional("Employment Type", &["employment type", "employmenttype", "type"]),
        FieldSpec::optional("Position", &["position"]),
        FieldSpec::optional("Specialization", &["specialization"]),
        FieldSpec::optional(
            "Phone Number",
            &["phone number", "phonenumber", "phone", "mobile", "contact number"],
        ),
        FieldSpec::optional(
            "Date of Birth",
            &["date of birth", "dateofbirth", "dob", "birthdate", "birth date"],
        ),
        FieldSpec::optional("Address", &["address", "home address", "homeaddress", "residence"]),
        FieldSpec::optional("Date Hired", &["date hired", "datehired"]),
        FieldSpec::optional("Employee Number", &["employee number", "employeenumber"]),
    ],
};

/// One accepted teacher row.
#[derive(Clone, Debug, PartialEq)]
pub struct TeacherRecord {
    pub teacher_id: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub position: Option<String>,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub date_hired: Option<String>,
    pub employee_number: Option<String>,
}

impl ImportRecord for TeacherRecord {
    fn schema() -> &'static Schema {
        &TEACHER_SCHEMA
    }

    fn from_values(values: &mut [FieldValue]) -> Self {
        TeacherRecord {
            teacher_id: values[0].take_text().unwrap_or_default(),
            first_name: values[1].take_text().unwrap_or_default(),
            last_name: values[2].take_text().unwrap_or_default(),
            middle_name: values[3].take_text(),
            email: values[4].take_text(),
            department: values[5].take_text(),
            employment_type: values[6].take_text(),
            position: values[7].take_text(),
            specialization: values[8].take_text(),
            phone_number: values[9].take_text(),
            date_of_birth: values[10].take_text(),
            address: values[11].take_text(),
            date_hired: values[12].take_text(),
            employee_number: values[13].take_text(),
        }
    }
}
