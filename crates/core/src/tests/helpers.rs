// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_timetable_domain::{
    ClassSection, Classroom, CurriculumEntry, DepartmentCode, FacultyMember, Subject,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_department() -> DepartmentCode {
    DepartmentCode::new("CSE").unwrap()
}

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2026-03-02 09:15:00 UTC)
}

pub fn create_test_class(class_id: i64, curriculum: Vec<CurriculumEntry>) -> ClassSection {
    ClassSection::new(class_id, create_test_department(), 2, &format!("S{class_id}"))
        .unwrap()
        .with_curriculum(curriculum)
}

pub fn create_test_classrooms(count: i64) -> Vec<Classroom> {
    (1..=count)
        .map(|id| Classroom {
            classroom_id: 900 + id,
            department: create_test_department(),
            room_number: format!("R-{}", 100 + id),
            capacity: 60,
            room_type: String::from("lecture"),
        })
        .collect()
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

/// A department with three classes sharing faculty, sized to schedule
/// comfortably in three rooms.
pub fn create_test_department_classes() -> Vec<ClassSection> {
    vec![
        create_test_class(
            1,
            vec![
                CurriculumEntry::new(10, 100, 4),
                CurriculumEntry::new(11, 101, 3),
                CurriculumEntry::new(12, 102, 3),
                CurriculumEntry::new(13, 103, 2),
            ],
        ),
        create_test_class(
            2,
            vec![
                CurriculumEntry::new(10, 100, 3),
                CurriculumEntry::new(14, 104, 4),
                CurriculumEntry::new(15, 101, 2),
            ],
        ),
        create_test_class(
            3,
            vec![
                CurriculumEntry::new(16, 105, 5),
                CurriculumEntry::new(17, 102, 3),
            ],
        ),
    ]
}
