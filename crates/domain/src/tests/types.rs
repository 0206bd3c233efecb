// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClassSection, CurriculumEntry, DepartmentCode, DomainError, Student};

fn create_test_class() -> ClassSection {
    ClassSection::new(10, DepartmentCode::new("CSE").unwrap(), 2, "B")
        .unwrap()
        .with_curriculum(vec![
            CurriculumEntry::new(100, 500, 3),
            CurriculumEntry::new(101, 501, 2),
        ])
}

#[test]
fn test_department_code_normalized_to_uppercase() {
    let lower: DepartmentCode = DepartmentCode::new(" cse ").unwrap();
    let upper: DepartmentCode = DepartmentCode::new("CSE").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.as_str(), "CSE");
}

#[test]
fn test_department_code_rejects_empty() {
    let result: Result<DepartmentCode, DomainError> = DepartmentCode::new("   ");
    assert!(matches!(result, Err(DomainError::InvalidDepartment(_))));
}

#[test]
fn test_department_code_deserialization_validates() {
    let ok: DepartmentCode = serde_json::from_str("\"mech\"").unwrap();
    assert_eq!(ok.as_str(), "MECH");

    let err: Result<DepartmentCode, _> = serde_json::from_str("\"\"");
    assert!(err.is_err());
}

#[test]
fn test_class_section_rejects_empty_section() {
    let result: Result<ClassSection, DomainError> =
        ClassSection::new(1, DepartmentCode::new("CSE").unwrap(), 1, " ");
    assert!(matches!(result, Err(DomainError::InvalidSection(_))));
}

#[test]
fn test_class_display_name_derived_from_year_and_section() {
    let class: ClassSection = create_test_class();
    assert_eq!(class.display_name(), "2-B");

    let labelled: ClassSection = class.with_label("CSE 2B");
    assert_eq!(labelled.display_name(), "CSE 2B");
}

#[test]
fn test_class_weekly_demand_sums_curriculum() {
    let class: ClassSection = create_test_class();
    assert_eq!(class.weekly_demand(), 5);
}

#[test]
fn test_class_section_missing_curriculum_defaults_to_empty() {
    let json: &str = r#"{"class_id":4,"department":"EEE","year":1,"section":"A"}"#;
    let class: ClassSection = serde_json::from_str(json).unwrap();
    assert!(class.curriculum.is_empty());
    assert_eq!(class.weekly_demand(), 0);
    assert!(class.label.is_none());
}

#[test]
fn test_student_without_class() {
    let json: &str = r#"{"student_id":7,"name":"Asha"}"#;
    let student: Student = serde_json::from_str(json).unwrap();
    assert_eq!(student.class_id, None);
}
