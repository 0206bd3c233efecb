// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod backend_validation_tests;

use campus_timetable_domain::{
    ClassSection, Classroom, CurriculumEntry, DepartmentCode, FacultyMember, ScheduleEntry,
    Student, Subject, TimeSlot, Timetable,
};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{CatalogFixture, Persistence};

pub fn create_test_department() -> DepartmentCode {
    DepartmentCode::new("CSE").unwrap()
}

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2026-03-02 09:15:00 UTC)
}

pub fn create_test_classroom(classroom_id: i64, department: &DepartmentCode) -> Classroom {
    Classroom {
        classroom_id,
        department: department.clone(),
        room_number: format!("R-{classroom_id}"),
        capacity: 60,
        room_type: String::from("lecture"),
    }
}

pub fn create_test_subject(subject_id: i64) -> Subject {
    Subject {
        subject_id,
        subject_code: format!("CS{subject_id}"),
        name: format!("Subject {subject_id}"),
        department: create_test_department(),
    }
}

pub fn create_test_faculty(faculty_id: i64) -> FacultyMember {
    FacultyMember {
        faculty_id,
        name: format!("Prof {faculty_id}"),
        department: create_test_department(),
    }
}

/// Two CSE classes, two CSE rooms and one ECE room, four subjects taught
/// by three faculty, and two students (one without a class).
pub fn create_test_fixture() -> CatalogFixture {
    let cse: DepartmentCode = create_test_department();
    let ece: DepartmentCode = DepartmentCode::new("ECE").unwrap();

    CatalogFixture {
        classrooms: vec![
            create_test_classroom(902, &cse),
            create_test_classroom(901, &cse),
            create_test_classroom(950, &ece),
        ],
        subjects: (10..=13).map(create_test_subject).collect(),
        faculty: (100..=102).map(create_test_faculty).collect(),
        classes: vec![
            ClassSection::new(1, cse.clone(), 2, "A")
                .unwrap()
                .with_curriculum(vec![
                    CurriculumEntry::new(12, 102, 2),
                    CurriculumEntry::new(10, 100, 4),
                    CurriculumEntry::new(11, 101, 3),
                ]),
            ClassSection::new(2, cse, 2, "B")
                .unwrap()
                .with_label("CSE 2B (Evening)")
                .with_curriculum(vec![CurriculumEntry::new(13, 100, 3)]),
        ],
        students: vec![
            Student {
                student_id: 500,
                name: String::from("Asha"),
                class_id: Some(1),
            },
            Student {
                student_id: 501,
                name: String::from("Ravi"),
                class_id: None,
            },
        ],
    }
}

/// Creates an in-memory store populated with [`create_test_fixture`].
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.import_catalog(&create_test_fixture()).unwrap();
    persistence
}

/// Builds a timetable from `(slot id, subject, faculty, classroom)` rows.
pub fn create_test_timetable(class_id: i64, rows: &[(&str, i64, i64, i64)]) -> Timetable {
    let mut timetable: Timetable =
        Timetable::new(class_id, create_test_department(), create_test_timestamp());
    for (slot, subject_id, faculty_id, classroom_id) in rows {
        let slot: TimeSlot = slot.parse().unwrap();
        timetable.schedule.insert(
            slot,
            ScheduleEntry {
                subject_id: *subject_id,
                faculty_id: *faculty_id,
                classroom_id: *classroom_id,
            },
        );
    }
    timetable
}
