// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use campus_timetable_domain::{
    ClassSection, Classroom, DepartmentCode, SlotTime, TimeSlot, Timetable,
    validate_department_classes,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::OffsetDateTime;
use tracing::debug;

use crate::assign::{Placement, assign_lectures};
use crate::breaks::allocate_breaks;
use crate::demand::{LectureInstance, expand_demand};
use crate::error::CoreError;
use crate::ledger::Ledgers;
use crate::partition::partition_by_class;
use crate::slots::shuffled_slot_order;

/// The outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// The department that was scheduled.
    pub department: DepartmentCode,
    /// One timetable per class, in class order.
    pub timetables: Vec<Timetable>,
    /// The break time chosen for each class.
    pub breaks: BTreeMap<i64, SlotTime>,
    /// Total lecture instances placed.
    pub lectures_placed: usize,
}

/// Generates timetables for every class of one department.
///
/// This is a pure computation: nothing is persisted, and on failure no
/// partial result is returned.
///
/// # Arguments
///
/// * `department` - The department being scheduled
/// * `classes` - All classes of the department, with curricula
/// * `classrooms` - All classrooms of the department, in load order
/// * `generated_at` - The timestamp stamped on every timetable
/// * `rng` - The randomness source for slot order and break choice
///
/// # Errors
///
/// Returns an error if:
/// - A class does not belong to the department, or class ids repeat
/// - The curricula demand no lectures
/// - Some lecture cannot be placed
pub fn generate_timetables<R: rand::Rng + ?Sized>(
    department: &DepartmentCode,
    classes: &[ClassSection],
    classrooms: &[Classroom],
    generated_at: OffsetDateTime,
    rng: &mut R,
) -> Result<GenerationResult, CoreError> {
    validate_department_classes(department, classes)?;

    let lectures: Vec<LectureInstance> = expand_demand(department, classes)?;
    let slot_order: Vec<TimeSlot> = shuffled_slot_order(rng);

    debug!(
        department = %department,
        classes = classes.len(),
        classrooms = classrooms.len(),
        lectures = lectures.len(),
        "Expanded lecture demand"
    );

    let mut ledgers: Ledgers = Ledgers::new();
    let breaks: BTreeMap<i64, SlotTime> = allocate_breaks(classes, &mut ledgers, rng);

    let placements: Vec<Placement> =
        assign_lectures(&lectures, &slot_order, classrooms, &mut ledgers)?;

    debug!(
        department = %department,
        placed = placements.len(),
        "Placed all lectures"
    );

    let timetables: Vec<Timetable> =
        partition_by_class(&placements, classes, department, generated_at);

    Ok(GenerationResult {
        department: department.clone(),
        timetables,
        breaks,
        lectures_placed: placements.len(),
    })
}

/// Generates timetables with a deterministic random source.
///
/// The same seed and inputs always produce the same result.
///
/// # Errors
///
/// See [`generate_timetables`].
pub fn generate_with_seed(
    department: &DepartmentCode,
    classes: &[ClassSection],
    classrooms: &[Classroom],
    generated_at: OffsetDateTime,
    seed: u64,
) -> Result<GenerationResult, CoreError> {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    generate_timetables(department, classes, classrooms, generated_at, &mut rng)
}
