// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_timetable_domain::{DepartmentCode, DomainError};

/// Errors that can occur while generating timetables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The department's curricula demand no lectures at all.
    NothingToSchedule {
        /// The department that was being scheduled.
        department: DepartmentCode,
    },
    /// A lecture instance found no slot in the whole weekly grid.
    ///
    /// The greedy pass does not backtrack, so this can be reported for
    /// inputs where some valid timetable exists.
    UnplaceableLecture {
        /// The class the lecture belongs to.
        class_id: i64,
        /// The subject of the lecture.
        subject_id: i64,
        /// The faculty member teaching the lecture.
        faculty_id: i64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::NothingToSchedule { department } => {
                write!(
                    f,
                    "No lectures to schedule for department {department}: every curriculum is empty"
                )
            }
            Self::UnplaceableLecture {
                class_id,
                subject_id,
                faculty_id,
            } => {
                write!(
                    f,
                    "Could not place a lecture of subject {subject_id} (faculty {faculty_id}) for class {class_id}: no conflict-free slot remains"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
