// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A department code such as `CSE` or `MECH`.
///
/// Department codes are normalized to uppercase so that comparisons are
/// case-insensitive. The code never contains surrounding whitespace and is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentCode(String);

impl DepartmentCode {
    /// Creates a new department code.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw department code
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized: String = value.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidDepartment(String::from(
                "Department code cannot be empty",
            )));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized department code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DepartmentCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DepartmentCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DepartmentCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DepartmentCode> for String {
    fn from(value: DepartmentCode) -> Self {
        value.0
    }
}

/// One line of a class curriculum: a subject taught by one faculty member
/// a fixed number of times per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurriculumEntry {
    /// The subject being taught.
    pub subject_id: i64,
    /// The faculty member teaching it.
    pub faculty_id: i64,
    /// Required weekly occurrences.
    pub lectures_per_week: u8,
}

impl CurriculumEntry {
    /// Creates a new curriculum entry.
    #[must_use]
    pub const fn new(subject_id: i64, faculty_id: i64, lectures_per_week: u8) -> Self {
        Self {
            subject_id,
            faculty_id,
            lectures_per_week,
        }
    }
}

/// A class section (for example, year 2 section B of a department).
///
/// The curriculum is owned by class management; the generator only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    /// The canonical class identifier.
    pub class_id: i64,
    /// The department this class belongs to.
    pub department: DepartmentCode,
    /// The year of study.
    pub year: u16,
    /// The section label within the year.
    pub section: String,
    /// Optional display label; derived from year and section when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Ordered curriculum entries.
    #[serde(default)]
    pub curriculum: Vec<CurriculumEntry>,
}

impl ClassSection {
    /// Creates a new class section with an empty curriculum.
    ///
    /// # Errors
    ///
    /// Returns an error if the section label is empty.
    pub fn new(
        class_id: i64,
        department: DepartmentCode,
        year: u16,
        section: &str,
    ) -> Result<Self, DomainError> {
        let section: &str = section.trim();
        if section.is_empty() {
            return Err(DomainError::InvalidSection(String::from(
                "Section cannot be empty",
            )));
        }
        Ok(Self {
            class_id,
            department,
            year,
            section: section.to_string(),
            label: None,
            curriculum: Vec::new(),
        })
    }

    /// Sets an explicit display label.
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Replaces the curriculum.
    #[must_use]
    pub fn with_curriculum(mut self, curriculum: Vec<CurriculumEntry>) -> Self {
        self.curriculum = curriculum;
        self
    }

    /// Returns the human-readable class name, e.g. `2-B`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{}-{}", self.year, self.section))
    }

    /// Total weekly lectures demanded by this class's curriculum.
    #[must_use]
    pub fn weekly_demand(&self) -> usize {
        self.curriculum
            .iter()
            .map(|entry| usize::from(entry.lectures_per_week))
            .sum()
    }
}

/// A physical room lectures can be held in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// The canonical classroom identifier.
    pub classroom_id: i64,
    /// The department owning the room.
    pub department: DepartmentCode,
    /// The room number shown to students and faculty.
    pub room_number: String,
    /// Seating capacity. Not used for placement.
    pub capacity: u32,
    /// Room type, e.g. `lecture` or `lab`.
    pub room_type: String,
}

/// A subject from the subject catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// The canonical subject identifier.
    pub subject_id: i64,
    /// Short subject code, e.g. `CS201`.
    pub subject_code: String,
    /// Full subject name.
    pub name: String,
    /// The department offering the subject.
    pub department: DepartmentCode,
}

/// A faculty member who can be assigned lectures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyMember {
    /// The canonical faculty identifier.
    pub faculty_id: i64,
    /// Display name.
    pub name: String,
    /// Home department.
    pub department: DepartmentCode,
}

/// A student enrolled in (at most) one class section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The canonical student identifier.
    pub student_id: i64,
    /// Display name.
    pub name: String,
    /// The class the student belongs to, if assigned.
    #[serde(default)]
    pub class_id: Option<i64>,
}
