// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ClassSection, DepartmentCode};
use std::collections::HashSet;

/// Converts a raw stored lecture count into a curriculum lecture count.
///
/// Zero is accepted and contributes no demand.
///
/// # Arguments
///
/// * `class_id` - The class owning the curriculum entry
/// * `subject_id` - The subject of the curriculum entry
/// * `raw` - The stored count
///
/// # Errors
///
/// Returns an error if the count is negative or larger than `u8::MAX`.
pub fn lecture_count_from_raw(class_id: i64, subject_id: i64, raw: i64) -> Result<u8, DomainError> {
    u8::try_from(raw).map_err(|_| DomainError::InvalidLectureCount {
        class_id,
        subject_id,
        count: raw,
    })
}

/// Validates that every class belongs to the given department and that
/// class identifiers are unique.
///
/// # Errors
///
/// Returns an error if:
/// - A class belongs to a different department
/// - Two classes share an identifier
pub fn validate_department_classes(
    department: &DepartmentCode,
    classes: &[ClassSection],
) -> Result<(), DomainError> {
    let mut seen: HashSet<i64> = HashSet::new();
    for class in classes {
        if &class.department != department {
            return Err(DomainError::InvalidDepartment(format!(
                "Class {} belongs to department {}, not {department}",
                class.class_id, class.department
            )));
        }
        if !seen.insert(class.class_id) {
            return Err(DomainError::InvalidSection(format!(
                "Duplicate class id {}",
                class.class_id
            )));
        }
    }
    Ok(())
}
