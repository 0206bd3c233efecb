// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::slot::TimeSlot;
use crate::types::DepartmentCode;

/// One scheduled lecture inside a class timetable.
///
/// The owning class is implicit: entries always live inside a [`Timetable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The subject taught.
    pub subject_id: i64,
    /// The faculty member teaching.
    pub faculty_id: i64,
    /// The room the lecture is held in.
    pub classroom_id: i64,
}

/// The persisted weekly timetable of one class.
///
/// A timetable is only ever replaced wholesale by a successful generation
/// run; it is never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    /// The class this timetable belongs to.
    pub class_id: i64,
    /// The department the class belongs to.
    pub department: DepartmentCode,
    /// When the generation run that produced this timetable completed.
    pub generated_at: OffsetDateTime,
    /// Scheduled lectures keyed by slot.
    pub schedule: BTreeMap<TimeSlot, ScheduleEntry>,
}

impl Timetable {
    /// Creates an empty timetable for a class.
    #[must_use]
    pub const fn new(
        class_id: i64,
        department: DepartmentCode,
        generated_at: OffsetDateTime,
    ) -> Self {
        Self {
            class_id,
            department,
            generated_at,
            schedule: BTreeMap::new(),
        }
    }

    /// Returns the number of scheduled lectures.
    #[must_use]
    pub fn lecture_count(&self) -> usize {
        self.schedule.len()
    }

    /// Iterates over the slots taught by one faculty member.
    pub fn slots_for_faculty(
        &self,
        faculty_id: i64,
    ) -> impl Iterator<Item = (&TimeSlot, &ScheduleEntry)> {
        self.schedule
            .iter()
            .filter(move |(_, entry)| entry.faculty_id == faculty_id)
    }
}
