// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_timetable::ScheduleView;
use campus_timetable_domain::Subject;
use campus_timetable_persistence::Persistence;

use crate::{
    ApiError, AuthenticatedCaller, CallerRole, GenerateTimetableRequest, generate_timetable,
    get_timetable,
};

use super::helpers::{
    create_test_admin, create_test_faculty, create_test_student, create_test_timestamp,
    setup_test_persistence,
};

fn generated_persistence() -> Persistence {
    let mut persistence = setup_test_persistence().expect("Failed to setup test persistence");
    generate_timetable(
        &mut persistence,
        &create_test_admin(),
        &GenerateTimetableRequest {
            department: None,
            seed: Some(21),
        },
        create_test_timestamp(),
    )
    .expect("Generation failed");
    persistence
}

#[test]
fn test_student_sees_resolved_class_timetable() {
    let mut persistence = generated_persistence();

    let view = get_timetable(&mut persistence, &create_test_student(500))
        .unwrap()
        .unwrap();

    let ScheduleView::Student {
        class_name,
        schedule,
    } = view
    else {
        panic!("Expected a student view");
    };
    assert_eq!(class_name.as_deref(), Some("2-A"));
    assert_eq!(schedule.len(), 5);
    for entry in schedule.values() {
        assert!(entry.subject_code.is_some());
        assert!(entry.faculty_name.is_some());
        assert!(entry.room_number.is_some());
    }
}

#[test]
fn test_student_without_class_gets_empty_schedule() {
    let mut persistence = generated_persistence();

    let view = get_timetable(&mut persistence, &create_test_student(501))
        .unwrap()
        .unwrap();

    assert_eq!(
        view,
        ScheduleView::Student {
            class_name: None,
            schedule: std::collections::BTreeMap::new(),
        }
    );
}

#[test]
fn test_student_of_class_with_empty_curriculum_gets_empty_schedule() {
    let mut persistence = generated_persistence();

    let view = get_timetable(&mut persistence, &create_test_student(502))
        .unwrap()
        .unwrap();

    assert!(view.is_empty());
    let ScheduleView::Student { class_name, .. } = &view else {
        panic!("expected student view");
    };
    assert_eq!(class_name.as_deref(), Some("3-A"));
}

#[test]
fn test_student_before_generation_gets_empty_schedule() {
    let mut persistence = setup_test_persistence().unwrap();

    let view = get_timetable(&mut persistence, &create_test_student(500))
        .unwrap()
        .unwrap();

    assert!(view.is_empty());
}

#[test]
fn test_unknown_student_is_not_found() {
    let mut persistence = generated_persistence();

    let result = get_timetable(&mut persistence, &create_test_student(404));

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_faculty_view_merges_all_taught_classes() {
    let mut persistence = generated_persistence();

    let view = get_timetable(&mut persistence, &create_test_faculty(100))
        .unwrap()
        .unwrap();

    let ScheduleView::Faculty { schedule } = view else {
        panic!("Expected a faculty view");
    };
    // Three lectures of subject 10 in class 1 plus two of subject 12 in class 2
    assert_eq!(schedule.len(), 5);
    assert_eq!(
        schedule.values().filter(|slot| slot.class_id == 2).count(),
        2
    );
    for slot in schedule.values() {
        assert_eq!(slot.entry.faculty_id, 100);
        assert_eq!(slot.entry.faculty_name.as_deref(), Some("Dr. Iyer"));
        let expected_name = if slot.class_id == 1 { "2-A" } else { "CSE 2B" };
        assert_eq!(slot.class_name.as_deref(), Some(expected_name));
    }
}

#[test]
fn test_faculty_department_falls_back_to_catalog() {
    let mut persistence = generated_persistence();
    let caller = AuthenticatedCaller::new(101, CallerRole::Faculty);

    let view = get_timetable(&mut persistence, &caller).unwrap().unwrap();

    assert_eq!(view.len(), 2);
}

#[test]
fn test_other_roles_get_no_view() {
    let mut persistence = generated_persistence();

    assert_eq!(get_timetable(&mut persistence, &create_test_admin()), Ok(None));
    let guest = AuthenticatedCaller::new(9, CallerRole::Other(String::from("guest")));
    assert_eq!(get_timetable(&mut persistence, &guest), Ok(None));
}

#[test]
fn test_reader_reflects_catalog_at_read_time() {
    let mut persistence = generated_persistence();
    persistence
        .upsert_subject(&Subject {
            subject_id: 10,
            subject_code: String::from("CS201R"),
            name: String::from("Data Structures (Revised)"),
            department: super::helpers::cse(),
        })
        .unwrap();

    let view = get_timetable(&mut persistence, &create_test_student(500))
        .unwrap()
        .unwrap();

    let ScheduleView::Student { schedule, .. } = view else {
        panic!("Expected a student view");
    };
    let revised = schedule
        .values()
        .filter(|entry| entry.subject_id == 10)
        .collect::<Vec<_>>();
    assert_eq!(revised.len(), 3);
    assert!(
        revised
            .iter()
            .all(|entry| entry.subject_code.as_deref() == Some("CS201R"))
    );
}

#[test]
fn test_student_view_json_shape() {
    let mut persistence = generated_persistence();

    let view = get_timetable(&mut persistence, &create_test_student(500))
        .unwrap()
        .unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["type"], "student");
    assert_eq!(json["class_name"], "2-A");
    let schedule = json["schedule"].as_object().unwrap();
    assert_eq!(schedule.len(), 5);
    assert!(schedule.keys().all(|slot| slot.contains('-') && slot.ends_with('M')));
}
