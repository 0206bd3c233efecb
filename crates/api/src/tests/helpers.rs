// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use campus_timetable_domain::{
    ClassSection, Classroom, CurriculumEntry, DepartmentCode, FacultyMember, Student, Subject,
};
use campus_timetable_persistence::{CatalogFixture, Persistence, PersistenceError};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{AdminScope, AuthenticatedCaller, CallerRole};

pub fn cse() -> DepartmentCode {
    DepartmentCode::new("CSE").unwrap()
}

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2026-03-02 09:15:00 UTC)
}

pub fn create_test_admin() -> AuthenticatedCaller {
    AuthenticatedCaller::new(1, CallerRole::Admin).with_admin_scope(AdminScope::Department(cse()))
}

pub fn create_test_super_admin() -> AuthenticatedCaller {
    AuthenticatedCaller::new(2, CallerRole::Admin).with_admin_scope(AdminScope::All)
}

pub fn create_test_student(student_id: i64) -> AuthenticatedCaller {
    AuthenticatedCaller::new(student_id, CallerRole::Student).with_department(cse())
}

pub fn create_test_faculty(faculty_id: i64) -> AuthenticatedCaller {
    AuthenticatedCaller::new(faculty_id, CallerRole::Faculty).with_department(cse())
}

/// The CSE catalog used across API tests.
///
/// - Class 1 (`2-A`): subject 10 x3 by faculty 100, subject 11 x2 by faculty 101
/// - Class 2 (`CSE 2B`): subject 12 x2 by faculty 100
/// - Class 3 (`3-A`): empty curriculum
/// - Students 500 (class 1), 501 (no class), 502 (class 3)
pub fn create_test_fixture() -> CatalogFixture {
    let department: DepartmentCode = cse();

    CatalogFixture {
        classrooms: vec![
            Classroom {
                classroom_id: 901,
                department: department.clone(),
                room_number: String::from("LH-1"),
                capacity: 60,
                room_type: String::from("lecture"),
            },
            Classroom {
                classroom_id: 902,
                department: department.clone(),
                room_number: String::from("LH-2"),
                capacity: 40,
                room_type: String::from("lecture"),
            },
        ],
        subjects: vec![
            subject(10, "CS201", "Data Structures"),
            subject(11, "CS202", "Discrete Mathematics"),
            subject(12, "CS203", "Operating Systems"),
        ],
        faculty: vec![
            FacultyMember {
                faculty_id: 100,
                name: String::from("Dr. Iyer"),
                department: department.clone(),
            },
            FacultyMember {
                faculty_id: 101,
                name: String::from("Dr. Rao"),
                department: department.clone(),
            },
        ],
        classes: vec![
            ClassSection::new(1, department.clone(), 2, "A")
                .unwrap()
                .with_curriculum(vec![
                    CurriculumEntry::new(10, 100, 3),
                    CurriculumEntry::new(11, 101, 2),
                ]),
            ClassSection::new(2, department.clone(), 2, "B")
                .unwrap()
                .with_label("CSE 2B")
                .with_curriculum(vec![CurriculumEntry::new(12, 100, 2)]),
            ClassSection::new(3, department, 3, "A").unwrap(),
        ],
        students: vec![
            student(500, Some(1)),
            student(501, None),
            student(502, Some(3)),
        ],
    }
}

fn subject(subject_id: i64, code: &str, name: &str) -> Subject {
    Subject {
        subject_id,
        subject_code: code.to_string(),
        name: name.to_string(),
        department: cse(),
    }
}

fn student(student_id: i64, class_id: Option<i64>) -> Student {
    Student {
        student_id,
        name: format!("Student {student_id}"),
        class_id,
    }
}

/// Sets up an in-memory store with the CSE catalog imported.
pub fn setup_test_persistence() -> Result<Persistence, PersistenceError> {
    let mut persistence: Persistence = Persistence::new_in_memory()?;
    persistence.import_catalog(&create_test_fixture())?;
    Ok(persistence)
}
