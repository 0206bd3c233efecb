// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_timetable_domain::{ClassSection, DepartmentCode};

use crate::error::CoreError;

/// One required weekly occurrence of a subject for a class.
///
/// Instances are request-local and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LectureInstance {
    /// The class attending the lecture.
    pub class_id: i64,
    /// The subject taught.
    pub subject_id: i64,
    /// The faculty member teaching.
    pub faculty_id: i64,
}

/// Flattens every class curriculum into atomic lecture instances.
///
/// Instances are emitted in class order, then curriculum order, with
/// `lectures_per_week` identical copies per curriculum entry. Classes with an
/// empty curriculum contribute nothing.
///
/// # Errors
///
/// Returns `CoreError::NothingToSchedule` if the total demand is zero.
pub fn expand_demand(
    department: &DepartmentCode,
    classes: &[ClassSection],
) -> Result<Vec<LectureInstance>, CoreError> {
    let lectures: Vec<LectureInstance> = classes
        .iter()
        .flat_map(|class| {
            class.curriculum.iter().flat_map(move |entry| {
                std::iter::repeat_n(
                    LectureInstance {
                        class_id: class.class_id,
                        subject_id: entry.subject_id,
                        faculty_id: entry.faculty_id,
                    },
                    usize::from(entry.lectures_per_week),
                )
            })
        })
        .collect();

    if lectures.is_empty() {
        return Err(CoreError::NothingToSchedule {
            department: department.clone(),
        });
    }

    Ok(lectures)
}
