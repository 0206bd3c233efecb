// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog queries: class sections with curricula, classrooms, subjects,
//! faculty and students.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use campus_timetable_domain::{ClassSection, Classroom, FacultyMember, Student, Subject};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{
    ClassSectionRow, ClassroomRow, CurriculumRow, class_section_from_rows, classroom_from_row,
    department_from_row,
};
use crate::diesel_schema::{
    class_sections, classrooms, curriculum_entries, faculty, students, subjects,
};
use crate::error::PersistenceError;

backend_fn! {
/// Lists every class section of a department, ordered by class id, with
/// curricula in their stored order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_class_sections(
    conn: &mut _,
    department: &str,
) -> Result<Vec<ClassSection>, PersistenceError> {
    let rows: Vec<ClassSectionRow> = class_sections::table
        .filter(class_sections::department.eq(department))
        .order(class_sections::class_id.asc())
        .select((
            class_sections::class_id,
            class_sections::department,
            class_sections::year,
            class_sections::section,
            class_sections::label,
        ))
        .load::<ClassSectionRow>(conn)?;

    let class_ids: Vec<i64> = rows.iter().map(|row| row.0).collect();
    let curriculum: Vec<CurriculumRow> = curriculum_entries::table
        .filter(curriculum_entries::class_id.eq_any(&class_ids))
        .order((
            curriculum_entries::class_id.asc(),
            curriculum_entries::position.asc(),
        ))
        .select((
            curriculum_entries::class_id,
            curriculum_entries::subject_id,
            curriculum_entries::faculty_id,
            curriculum_entries::lectures_per_week,
        ))
        .load::<CurriculumRow>(conn)?;

    rows.into_iter()
        .map(|row| class_section_from_rows(row, &curriculum))
        .collect()
}
}

backend_fn! {
/// Loads class sections by id. Unknown ids are skipped.
///
/// Curricula are not loaded; only identity and naming fields are filled.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn get_class_sections_by_ids(
    conn: &mut _,
    class_ids: &[i64],
) -> Result<Vec<ClassSection>, PersistenceError> {
    let rows: Vec<ClassSectionRow> = class_sections::table
        .filter(class_sections::class_id.eq_any(class_ids))
        .order(class_sections::class_id.asc())
        .select((
            class_sections::class_id,
            class_sections::department,
            class_sections::year,
            class_sections::section,
            class_sections::label,
        ))
        .load::<ClassSectionRow>(conn)?;

    rows.into_iter()
        .map(|row| class_section_from_rows(row, &[]))
        .collect()
}
}

backend_fn! {
/// Lists every classroom of a department in load order (by classroom id).
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_classrooms(
    conn: &mut _,
    department: &str,
) -> Result<Vec<Classroom>, PersistenceError> {
    let rows: Vec<ClassroomRow> = classrooms::table
        .filter(classrooms::department.eq(department))
        .order(classrooms::classroom_id.asc())
        .select((
            classrooms::classroom_id,
            classrooms::department,
            classrooms::room_number,
            classrooms::capacity,
            classrooms::room_type,
        ))
        .load::<ClassroomRow>(conn)?;

    rows.into_iter().map(classroom_from_row).collect()
}
}

backend_fn! {
/// Loads classrooms by id. Unknown ids are skipped.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn get_classrooms_by_ids(
    conn: &mut _,
    classroom_ids: &[i64],
) -> Result<Vec<Classroom>, PersistenceError> {
    let rows: Vec<ClassroomRow> = classrooms::table
        .filter(classrooms::classroom_id.eq_any(classroom_ids))
        .select((
            classrooms::classroom_id,
            classrooms::department,
            classrooms::room_number,
            classrooms::capacity,
            classrooms::room_type,
        ))
        .load::<ClassroomRow>(conn)?;

    rows.into_iter().map(classroom_from_row).collect()
}
}

backend_fn! {
/// Loads subjects by id. Unknown ids are skipped.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn get_subjects_by_ids(
    conn: &mut _,
    subject_ids: &[i64],
) -> Result<Vec<Subject>, PersistenceError> {
    let rows = subjects::table
        .filter(subjects::subject_id.eq_any(subject_ids))
        .select((
            subjects::subject_id,
            subjects::subject_code,
            subjects::name,
            subjects::department,
        ))
        .load::<(i64, String, String, String)>(conn)?;

    rows.into_iter()
        .map(|(subject_id, subject_code, name, department)| {
            Ok(Subject {
                subject_id,
                subject_code,
                name,
                department: department_from_row(&department)?,
            })
        })
        .collect()
}
}

backend_fn! {
/// Loads faculty members by id. Unknown ids are skipped.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn get_faculty_by_ids(
    conn: &mut _,
    faculty_ids: &[i64],
) -> Result<Vec<FacultyMember>, PersistenceError> {
    let rows = faculty::table
        .filter(faculty::faculty_id.eq_any(faculty_ids))
        .select((faculty::faculty_id, faculty::name, faculty::department))
        .load::<(i64, String, String)>(conn)?;

    rows.into_iter()
        .map(|(faculty_id, name, department)| {
            Ok(FacultyMember {
                faculty_id,
                name,
                department: department_from_row(&department)?,
            })
        })
        .collect()
}
}

backend_fn! {
/// Loads one student.
///
/// # Errors
///
/// Returns `PersistenceError::StudentNotFound` if no such student exists.
pub fn get_student(
    conn: &mut _,
    student_id: i64,
) -> Result<Student, PersistenceError> {
    let (student_id, name, class_id) = students::table
        .filter(students::student_id.eq(student_id))
        .select((students::student_id, students::name, students::class_id))
        .first::<(i64, String, Option<i64>)>(conn)
        .optional()?
        .ok_or(PersistenceError::StudentNotFound(student_id))?;

    Ok(Student {
        student_id,
        name,
        class_id,
    })
}
}
