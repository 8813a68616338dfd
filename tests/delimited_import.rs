//! End-to-end delimited-text imports.

use roster_import::{read_delimited, GradeRecord, ImportError, StudentRecord};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn students_import_with_partial_failure() {
    init_logging();
    let text = "Student ID,First Name,Last Name\n001,Ana,Cruz\n,Bad,Row\n002,Ben,Diaz\n";
    let import = read_delimited::<StudentRecord, _>(text.as_bytes()).expect("import students");

    assert_eq!(import.records.len(), 2);
    assert_eq!(import.records[0].student_id, "001");
    assert_eq!(import.records[0].first_name, "Ana");
    assert_eq!(import.records[0].last_name, "Cruz");
    assert_eq!(import.records[1].student_id, "002");
    assert_eq!(import.records[1].first_name, "Ben");
    assert_eq!(import.records[1].last_name, "Diaz");
    assert_eq!(import.rejections, vec!["Row 3: Missing Student ID"]);
}

#[test]
fn headers_are_trimmed_and_case_insensitive() {
    init_logging();
    let text = " last name ,ID,FIRST NAME\nCruz,001,Ana\n";
    let import = read_delimited::<StudentRecord, _>(text.as_bytes()).expect("import students");
    assert_eq!(import.records.len(), 1);
    assert_eq!(import.records[0].student_id, "001");
    assert_eq!(import.records[0].last_name, "Cruz");
}

#[test]
fn optional_columns_may_be_entirely_absent() {
    init_logging();
    let text = "Student Name,Final\nAna Cruz,91\n";
    let import = read_delimited::<GradeRecord, _>(text.as_bytes()).expect("import grades");
    assert_eq!(import.records.len(), 1);
    assert_eq!(import.records[0].final_grade, Some(91.0));
    assert_eq!(import.records[0].prelim, None);
    assert_eq!(import.records[0].midterm, None);
}

#[test]
fn missing_required_columns_fail_before_any_row() {
    init_logging();
    let text = "Name Tag,Given\nAna,Cruz\n";
    match read_delimited::<StudentRecord, _>(text.as_bytes()) {
        Err(ImportError::MissingRequiredColumns(missing)) => {
            assert_eq!(missing, vec!["Student ID", "First Name", "Last Name"]);
        }
        other => panic!("expected MissingRequiredColumns, got {other:?}"),
    }
}

#[test]
fn a_lone_header_line_has_no_readable_data() {
    init_logging();
    let text = "Student ID,First Name,Last Name\n";
    assert!(matches!(
        read_delimited::<StudentRecord, _>(text.as_bytes()),
        Err(ImportError::EmptyInput),
    ));
}
