// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use campus_timetable_domain::{
    ClassSection, Classroom, CurriculumEntry, DepartmentCode, FacultyMember, ScheduleEntry,
    Student, Subject, TimeSlot, Timetable, lecture_count_from_raw,
};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

/// A bulk catalog document, as supplied by the external catalog services.
///
/// Every section is optional in the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFixture {
    /// Classrooms, in load order.
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    /// Subjects.
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Faculty members.
    #[serde(default)]
    pub faculty: Vec<FacultyMember>,
    /// Class sections with their curricula.
    #[serde(default)]
    pub classes: Vec<ClassSection>,
    /// Students and their class assignments.
    #[serde(default)]
    pub students: Vec<Student>,
}

impl CatalogFixture {
    /// Parses a catalog fixture from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value fails domain
    /// validation (for example an empty department code).
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Counts of catalog rows written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogImportSummary {
    /// Classrooms written.
    pub classrooms: usize,
    /// Subjects written.
    pub subjects: usize,
    /// Faculty members written.
    pub faculty: usize,
    /// Class sections written.
    pub classes: usize,
    /// Students written.
    pub students: usize,
}

/// `(class_id, department, year, section, label)`
pub type ClassSectionRow = (i64, String, i32, String, Option<String>);

/// `(class_id, subject_id, faculty_id, lectures_per_week)`, ordered by position.
pub type CurriculumRow = (i64, i64, i64, i32);

/// `(classroom_id, department, room_number, capacity, room_type)`
pub type ClassroomRow = (i64, String, String, i32, String);

/// `(class_id, department, generated_at)`
pub type TimetableRow = (i64, String, String);

/// `(class_id, slot_id, subject_id, faculty_id, classroom_id)`
pub type TimetableEntryRow = (i64, String, i64, i64, i64);

/// Parses a stored department code.
///
/// # Errors
///
/// Returns an error if a stored value is no longer valid.
pub fn department_from_row(raw: &str) -> Result<DepartmentCode, PersistenceError> {
    Ok(DepartmentCode::new(raw)?)
}

/// Rebuilds a class section, picking its curriculum out of `curriculum`.
///
/// # Errors
///
/// Returns an error if a stored value is no longer valid.
pub fn class_section_from_rows(
    row: ClassSectionRow,
    curriculum: &[CurriculumRow],
) -> Result<ClassSection, PersistenceError> {
    let (class_id, department, year, section, label) = row;

    let year: u16 = year.to_u16().ok_or_else(|| {
        PersistenceError::ReconstructionError(format!("Invalid year {year} for class {class_id}"))
    })?;

    let entries: Vec<CurriculumEntry> = curriculum
        .iter()
        .filter(|(owner, ..)| *owner == class_id)
        .map(|(_, subject_id, faculty_id, lectures)| {
            let count: u8 = lecture_count_from_raw(class_id, *subject_id, i64::from(*lectures))?;
            Ok(CurriculumEntry::new(*subject_id, *faculty_id, count))
        })
        .collect::<Result<_, PersistenceError>>()?;

    let department: DepartmentCode = department_from_row(&department)?;
    let mut class: ClassSection = ClassSection::new(class_id, department, year, &section)?;
    class.curriculum = entries;
    class.label = label;
    Ok(class)
}

/// Rebuilds a classroom.
///
/// # Errors
///
/// Returns an error if a stored value is no longer valid.
pub fn classroom_from_row(row: ClassroomRow) -> Result<Classroom, PersistenceError> {
    let (classroom_id, department, room_number, capacity, room_type) = row;
    Ok(Classroom {
        classroom_id,
        department: department_from_row(&department)?,
        room_number,
        capacity: capacity.to_u32().ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Invalid capacity {capacity} for classroom {classroom_id}"
            ))
        })?,
        room_type,
    })
}

/// Rebuilds a timetable, picking its entries out of `entries`.
///
/// # Errors
///
/// Returns an error if a stored value is no longer valid.
pub fn timetable_from_rows(
    row: TimetableRow,
    entries: &[TimetableEntryRow],
) -> Result<Timetable, PersistenceError> {
    let (class_id, department, generated_at) = row;

    let generated_at: OffsetDateTime = parse_generated_at(class_id, &generated_at)?;

    let schedule: BTreeMap<TimeSlot, ScheduleEntry> = entries
        .iter()
        .filter(|(owner, ..)| *owner == class_id)
        .map(|(_, slot_id, subject_id, faculty_id, classroom_id)| {
            let slot: TimeSlot = slot_id.parse()?;
            Ok((
                slot,
                ScheduleEntry {
                    subject_id: *subject_id,
                    faculty_id: *faculty_id,
                    classroom_id: *classroom_id,
                },
            ))
        })
        .collect::<Result<_, PersistenceError>>()?;

    Ok(Timetable {
        class_id,
        department: department_from_row(&department)?,
        generated_at,
        schedule,
    })
}

fn parse_generated_at(class_id: i64, raw: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|e| {
        PersistenceError::ReconstructionError(format!(
            "Invalid generated_at '{raw}' for class {class_id}: {e}"
        ))
    })
}

/// Formats a generation timestamp for storage as RFC 3339.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn format_generated_at(generated_at: OffsetDateTime) -> Result<String, PersistenceError> {
    generated_at
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Narrows an unsigned value into an `INTEGER` column.
///
/// # Errors
///
/// Returns an error if the value exceeds `i32::MAX`.
pub fn to_column_i32(field: &'static str, value: u32) -> Result<i32, PersistenceError> {
    value.to_i32().ok_or(PersistenceError::ValueOutOfRange {
        field,
        value: i64::from(value),
    })
}
