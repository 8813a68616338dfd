//! End-to-end workbook imports over in-memory archives.

use roster_import::{
    read_workbook, GradeRecord, ImportError, StudentRecord, TeacherRecord,
};
use std::io::Cursor;
use std::io::Write;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>";

/// Builds an in-memory ZIP archive from (entry name, content) pairs.
fn workbook(entries: &[(&str, &str)]) -> Cursor<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(content.as_bytes()).expect("write entry");
    }
    writer.finish().expect("finish archive")
}

fn shared_strings_xml(strings: &[&str]) -> String {
    let items: String = strings
        .iter()
        .map(|string| format!("<si><t>{string}</t></si>"))
        .collect();
    format!("{XML_DECLARATION}<sst xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">{items}</sst>")
}

fn worksheet_xml(rows: &str) -> String {
    format!("{XML_DECLARATION}<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\"><sheetData>{rows}</sheetData></worksheet>")
}

#[test]
fn students_import_from_shared_string_cells() {
    init_logging();
    let shared = shared_strings_xml(&[
        "Student ID",
        "First Name",
        "Last Name",
        "001",
        "Ana",
        "Cruz",
        "Ben",
        "Diaz",
    ]);
    let sheet = worksheet_xml(
        "<row r=\"1\">\
         <c r=\"A1\" t=\"s\"><v>0</v></c>\
         <c r=\"B1\" t=\"s\"><v>1</v></c>\
         <c r=\"C1\" t=\"s\"><v>2</v></c>\
         </row>\
         <row r=\"2\">\
         <c r=\"A2\" t=\"s\"><v>3</v></c>\
         <c r=\"B2\" t=\"s\"><v>4</v></c>\
         <c r=\"C2\" t=\"s\"><v>5</v></c>\
         </row>\
         <row r=\"3\">\
         <c r=\"A3\"><v>2</v></c>\
         <c r=\"B3\" t=\"s\"><v>6</v></c>\
         <c r=\"C3\" t=\"s\"><v>7</v></c>\
         </row>",
    );
    let archive = workbook(&[
        ("xl/sharedStrings.xml", &shared),
        ("xl/worksheets/sheet1.xml", &sheet),
    ]);

    let import = read_workbook::<StudentRecord, _>(archive).expect("import students");
    assert_eq!(import.records.len(), 2);
    assert!(import.rejections.is_empty());
    assert_eq!(import.records[0].student_id, "001");
    assert_eq!(import.records[0].first_name, "Ana");
    assert_eq!(import.records[0].last_name, "Cruz");
    // Numeric ID cell renders without a fractional part.
    assert_eq!(import.records[1].student_id, "2");
}

#[test]
fn inline_strings_work_without_a_shared_string_table() {
    init_logging();
    let sheet = worksheet_xml(
        "<row r=\"1\">\
         <c r=\"A1\" t=\"inlineStr\"><is><t>Teacher ID</t></is></c>\
         <c r=\"B1\" t=\"inlineStr\"><is><t>First Name</t></is></c>\
         <c r=\"C1\" t=\"inlineStr\"><is><t>Last Name</t></is></c>\
         </row>\
         <row r=\"2\">\
         <c r=\"A2\" t=\"inlineStr\"><is><t>T-10</t></is></c>\
         <c r=\"B2\" t=\"inlineStr\"><is><t>Maya</t></is></c>\
         <c r=\"C2\" t=\"inlineStr\"><is><t>Reyes</t></is></c>\
         </row>",
    );
    let archive = workbook(&[("xl/worksheets/sheet1.xml", &sheet)]);

    let import = read_workbook::<TeacherRecord, _>(archive).expect("import teachers");
    assert_eq!(import.records.len(), 1);
    assert_eq!(import.records[0].teacher_id, "T-10");
}

#[test]
fn sparse_rows_reject_with_their_row_numbers() {
    init_logging();
    let shared = shared_strings_xml(&["Student ID", "First Name", "Last Name", "Ana", "Cruz"]);
    // Row 2 skips the blank A2 cell entirely, so Student ID is missing.
    let sheet = worksheet_xml(
        "<row r=\"1\">\
         <c r=\"A1\" t=\"s\"><v>0</v></c>\
         <c r=\"B1\" t=\"s\"><v>1</v></c>\
         <c r=\"C1\" t=\"s\"><v>2</v></c>\
         </row>\
         <row r=\"2\">\
         <c r=\"B2\" t=\"s\"><v>3</v></c>\
         <c r=\"C2\" t=\"s\"><v>4</v></c>\
         </row>",
    );
    let archive = workbook(&[
        ("xl/sharedStrings.xml", &shared),
        ("xl/worksheets/sheet1.xml", &sheet),
    ]);

    match read_workbook::<StudentRecord, _>(archive) {
        Err(ImportError::NoRowsAccepted(reasons)) => {
            assert_eq!(reasons, vec!["Row 2: Missing Student ID"]);
        }
        other => panic!("expected NoRowsAccepted, got {other:?}"),
    }
}

#[test]
fn grade_scores_come_back_as_numbers() {
    init_logging();
    let sheet = worksheet_xml(
        "<row r=\"1\">\
         <c r=\"A1\" t=\"inlineStr\"><is><t>Student Name</t></is></c>\
         <c r=\"B1\" t=\"inlineStr\"><is><t>Prelim</t></is></c>\
         <c r=\"C1\" t=\"inlineStr\"><is><t>Midterm</t></is></c>\
         <c r=\"D1\" t=\"inlineStr\"><is><t>Final</t></is></c>\
         </row>\
         <row r=\"2\">\
         <c r=\"A2\" t=\"inlineStr\"><is><t>Ana Cruz</t></is></c>\
         <c r=\"B2\"><v>88.5</v></c>\
         <c r=\"D2\"><v>90.0</v></c>\
         </row>",
    );
    let archive = workbook(&[("xl/worksheets/sheet1.xml", &sheet)]);

    let import = read_workbook::<GradeRecord, _>(archive).expect("import grades");
    assert_eq!(import.records.len(), 1);
    let record = &import.records[0];
    assert_eq!(record.student_name, "Ana Cruz");
    assert_eq!(record.prelim, Some(88.5));
    assert_eq!(record.midterm, None);
    assert_eq!(record.final_grade, Some(90.0));
}

#[test]
fn archive_without_a_worksheet_has_no_readable_data() {
    init_logging();
    let shared = shared_strings_xml(&["orphaned"]);
    let archive = workbook(&[("xl/sharedStrings.xml", &shared)]);
    assert!(matches!(
        read_workbook::<StudentRecord, _>(archive),
        Err(ImportError::EmptyInput),
    ));
}

#[test]
fn malformed_worksheet_xml_has_no_readable_data() {
    init_logging();
    let archive = workbook(&[("xl/worksheets/sheet1.xml", "<worksheet><row r=")]);
    assert!(matches!(
        read_workbook::<StudentRecord, _>(archive),
        Err(ImportError::EmptyInput),
    ));
}

#[test]
fn garbage_bytes_are_a_malformed_container() {
    init_logging();
    let bytes = Cursor::new(b"this is not a zip archive".to_vec());
    assert!(matches!(
        read_workbook::<StudentRecord, _>(bytes),
        Err(ImportError::MalformedContainer(_)),
    ));
}
