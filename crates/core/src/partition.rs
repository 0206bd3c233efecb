// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use campus_timetable_domain::{ClassSection, DepartmentCode, ScheduleEntry, Timetable};
use time::OffsetDateTime;

use crate::assign::Placement;

/// Splits placements into one timetable per class.
///
/// Every class in `classes` receives a timetable, including classes with an
/// empty curriculum, so that a rerun replaces any stale schedule they had.
/// Timetables are returned in class order.
#[must_use]
pub fn partition_by_class(
    placements: &[Placement],
    classes: &[ClassSection],
    department: &DepartmentCode,
    generated_at: OffsetDateTime,
) -> Vec<Timetable> {
    let mut by_class: BTreeMap<i64, Timetable> = classes
        .iter()
        .map(|class| {
            (
                class.class_id,
                Timetable::new(class.class_id, department.clone(), generated_at),
            )
        })
        .collect();

    for placement in placements {
        if let Some(timetable) = by_class.get_mut(&placement.lecture.class_id) {
            timetable.schedule.insert(
                placement.slot,
                ScheduleEntry {
                    subject_id: placement.lecture.subject_id,
                    faculty_id: placement.lecture.faculty_id,
                    classroom_id: placement.classroom_id,
                },
            );
        }
    }

    classes
        .iter()
        .filter_map(|class| by_class.remove(&class.class_id))
        .collect()
}
