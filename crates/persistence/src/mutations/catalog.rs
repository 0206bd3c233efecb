// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog mutations.
//!
//! The catalog is owned by external services; these mutations mirror their
//! entities into the local store. Each upsert updates the row with the given
//! id if it exists and inserts it otherwise.

use campus_timetable_domain::{ClassSection, Classroom, FacultyMember, Student, Subject};
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::to_column_i32;
use crate::diesel_schema::{
    class_sections, classrooms, curriculum_entries, faculty, students, subjects,
};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or updates a classroom.
///
/// # Errors
///
/// Returns an error if the write fails or the capacity does not fit the column.
pub fn upsert_classroom(
    conn: &mut _,
    classroom: &Classroom,
) -> Result<(), PersistenceError> {
    let capacity: i32 = to_column_i32("classrooms.capacity", classroom.capacity)?;
    let present: bool = diesel::select(exists(
        classrooms::table.filter(classrooms::classroom_id.eq(classroom.classroom_id)),
    ))
    .get_result(conn)?;

    if present {
        diesel::update(classrooms::table.filter(classrooms::classroom_id.eq(classroom.classroom_id)))
            .set((
                classrooms::department.eq(classroom.department.as_str()),
                classrooms::room_number.eq(&classroom.room_number),
                classrooms::capacity.eq(capacity),
                classrooms::room_type.eq(&classroom.room_type),
            ))
            .execute(conn)?;
    } else {
        diesel::insert_into(classrooms::table)
            .values((
                classrooms::classroom_id.eq(classroom.classroom_id),
                classrooms::department.eq(classroom.department.as_str()),
                classrooms::room_number.eq(&classroom.room_number),
                classrooms::capacity.eq(capacity),
                classrooms::room_type.eq(&classroom.room_type),
            ))
            .execute(conn)?;
    }

    debug!(classroom_id = classroom.classroom_id, updated = present, "Stored classroom");
    Ok(())
}
}

backend_fn! {
/// Inserts or updates a subject.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_subject(
    conn: &mut _,
    subject: &Subject,
) -> Result<(), PersistenceError> {
    let present: bool = diesel::select(exists(
        subjects::table.filter(subjects::subject_id.eq(subject.subject_id)),
    ))
    .get_result(conn)?;

    if present {
        diesel::update(subjects::table.filter(subjects::subject_id.eq(subject.subject_id)))
            .set((
                subjects::subject_code.eq(&subject.subject_code),
                subjects::name.eq(&subject.name),
                subjects::department.eq(subject.department.as_str()),
            ))
            .execute(conn)?;
    } else {
        diesel::insert_into(subjects::table)
            .values((
                subjects::subject_id.eq(subject.subject_id),
                subjects::subject_code.eq(&subject.subject_code),
                subjects::name.eq(&subject.name),
                subjects::department.eq(subject.department.as_str()),
            ))
            .execute(conn)?;
    }

    debug!(subject_id = subject.subject_id, updated = present, "Stored subject");
    Ok(())
}
}

backend_fn! {
/// Inserts or updates a faculty member.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_faculty_member(
    conn: &mut _,
    member: &FacultyMember,
) -> Result<(), PersistenceError> {
    let present: bool = diesel::select(exists(
        faculty::table.filter(faculty::faculty_id.eq(member.faculty_id)),
    ))
    .get_result(conn)?;

    if present {
        diesel::update(faculty::table.filter(faculty::faculty_id.eq(member.faculty_id)))
            .set((
                faculty::name.eq(&member.name),
                faculty::department.eq(member.department.as_str()),
            ))
            .execute(conn)?;
    } else {
        diesel::insert_into(faculty::table)
            .values((
                faculty::faculty_id.eq(member.faculty_id),
                faculty::name.eq(&member.name),
                faculty::department.eq(member.department.as_str()),
            ))
            .execute(conn)?;
    }

    debug!(faculty_id = member.faculty_id, updated = present, "Stored faculty member");
    Ok(())
}
}

backend_fn! {
/// Inserts or updates a class section and replaces its curriculum.
///
/// Curriculum subjects and faculty must already exist.
///
/// # Errors
///
/// Returns an error if the write fails or a curriculum reference is unknown.
pub fn upsert_class_section(
    conn: &mut _,
    class: &ClassSection,
) -> Result<(), PersistenceError> {
    let present: bool = diesel::select(exists(
        class_sections::table.filter(class_sections::class_id.eq(class.class_id)),
    ))
    .get_result(conn)?;

    if present {
        diesel::update(class_sections::table.filter(class_sections::class_id.eq(class.class_id)))
            .set((
                class_sections::department.eq(class.department.as_str()),
                class_sections::year.eq(i32::from(class.year)),
                class_sections::section.eq(&class.section),
                class_sections::label.eq(class.label.as_deref()),
            ))
            .execute(conn)?;
    } else {
        diesel::insert_into(class_sections::table)
            .values((
                class_sections::class_id.eq(class.class_id),
                class_sections::department.eq(class.department.as_str()),
                class_sections::year.eq(i32::from(class.year)),
                class_sections::section.eq(&class.section),
                class_sections::label.eq(class.label.as_deref()),
            ))
            .execute(conn)?;
    }

    diesel::delete(curriculum_entries::table.filter(curriculum_entries::class_id.eq(class.class_id)))
        .execute(conn)?;

    for (position, entry) in (0_i32..).zip(class.curriculum.iter()) {
        diesel::insert_into(curriculum_entries::table)
            .values((
                curriculum_entries::class_id.eq(class.class_id),
                curriculum_entries::position.eq(position),
                curriculum_entries::subject_id.eq(entry.subject_id),
                curriculum_entries::faculty_id.eq(entry.faculty_id),
                curriculum_entries::lectures_per_week.eq(i32::from(entry.lectures_per_week)),
            ))
            .execute(conn)?;
    }

    debug!(
        class_id = class.class_id,
        curriculum_entries = class.curriculum.len(),
        updated = present,
        "Stored class section"
    );
    Ok(())
}
}

backend_fn! {
/// Inserts or updates a student.
///
/// # Errors
///
/// Returns an error if the write fails or the class is unknown.
pub fn upsert_student(
    conn: &mut _,
    student: &Student,
) -> Result<(), PersistenceError> {
    let present: bool = diesel::select(exists(
        students::table.filter(students::student_id.eq(student.student_id)),
    ))
    .get_result(conn)?;

    if present {
        diesel::update(students::table.filter(students::student_id.eq(student.student_id)))
            .set((
                students::name.eq(&student.name),
                students::class_id.eq(student.class_id),
            ))
            .execute(conn)?;
    } else {
        diesel::insert_into(students::table)
            .values((
                students::student_id.eq(student.student_id),
                students::name.eq(&student.name),
                students::class_id.eq(student.class_id),
            ))
            .execute(conn)?;
    }

    debug!(student_id = student.student_id, updated = present, "Stored student");
    Ok(())
}
}
