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

//! Weekly timetable generation for one department.
//!
//! Generation runs as a fixed pipeline over request-local state:
//!
//! 1. Expand every class curriculum into lecture instances.
//! 2. Draw one random traversal of the 40-slot grid.
//! 3. Reserve one break time per class on all five days.
//! 4. Place lectures first-fit against the occupancy ledgers.
//! 5. Partition placements into one timetable per class.
//!
//! The [`reader`] module is the independent read path that resolves a
//! persisted timetable into role-shaped display views.

mod assign;
mod breaks;
mod demand;
mod error;
mod generate;
mod ledger;
mod partition;
pub mod reader;
mod slots;

#[cfg(test)]
mod tests;

pub use assign::{Placement, assign_lectures};
pub use breaks::allocate_breaks;
pub use demand::{LectureInstance, expand_demand};
pub use error::CoreError;
pub use generate::{GenerationResult, generate_timetables, generate_with_seed};
pub use ledger::Ledgers;
pub use partition::partition_by_class;
pub use reader::{
    Catalog, FacultySlot, ReferencedIds, ResolvedEntry, ScheduleView, faculty_entries,
    faculty_view, referenced_ids, student_view,
};
pub use slots::shuffled_slot_order;
