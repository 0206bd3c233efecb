// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ClassSection, DepartmentCode, DomainError, lecture_count_from_raw, validate_department_classes,
};

fn create_test_class(class_id: i64, department: &str) -> ClassSection {
    let department = DepartmentCode::new(department).unwrap();
    ClassSection::new(class_id, department, 1, "A").unwrap()
}

#[test]
fn test_lecture_count_accepts_zero_and_small_counts() {
    assert_eq!(lecture_count_from_raw(1, 2, 0).unwrap(), 0);
    assert_eq!(lecture_count_from_raw(1, 2, 4).unwrap(), 4);
}

#[test]
fn test_lecture_count_rejects_negative() {
    let result: Result<u8, DomainError> = lecture_count_from_raw(1, 2, -1);
    assert_eq!(
        result,
        Err(DomainError::InvalidLectureCount {
            class_id: 1,
            subject_id: 2,
            count: -1,
        })
    );
}

#[test]
fn test_lecture_count_rejects_overflow() {
    assert!(lecture_count_from_raw(1, 2, 300).is_err());
}

#[test]
fn test_validate_department_classes_accepts_matching_department() {
    let department: DepartmentCode = DepartmentCode::new("CSE").unwrap();
    let classes: Vec<ClassSection> = vec![create_test_class(1, "CSE"), create_test_class(2, "cse")];
    assert!(validate_department_classes(&department, &classes).is_ok());
}

#[test]
fn test_validate_department_classes_rejects_foreign_class() {
    let department: DepartmentCode = DepartmentCode::new("CSE").unwrap();
    let classes: Vec<ClassSection> =
        vec![create_test_class(1, "CSE"), create_test_class(2, "MECH")];
    let result: Result<(), DomainError> = validate_department_classes(&department, &classes);
    assert!(matches!(result, Err(DomainError::InvalidDepartment(_))));
}

#[test]
fn test_validate_department_classes_rejects_duplicate_ids() {
    let department: DepartmentCode = DepartmentCode::new("CSE").unwrap();
    let classes: Vec<ClassSection> = vec![create_test_class(1, "CSE"), create_test_class(1, "CSE")];
    let result: Result<(), DomainError> = validate_department_classes(&department, &classes);
    assert!(matches!(result, Err(DomainError::InvalidSection(_))));
}
