// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod slot;
mod timetable;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use slot::{DAYS_PER_WEEK, SLOTS_PER_DAY, SlotTime, TimeSlot, Weekday, slot_universe};
pub use timetable::{ScheduleEntry, Timetable};
pub use types::{
    ClassSection, Classroom, CurriculumEntry, DepartmentCode, FacultyMember, Student, Subject,
};
pub use validation::{lecture_count_from_raw, validate_department_classes};
