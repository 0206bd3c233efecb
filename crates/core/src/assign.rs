// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_timetable_domain::{Classroom, TimeSlot};

use crate::demand::LectureInstance;
use crate::error::CoreError;
use crate::ledger::Ledgers;

/// A lecture instance committed to a slot and room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The slot the lecture occupies.
    pub slot: TimeSlot,
    /// The lecture that was placed.
    pub lecture: LectureInstance,
    /// The room the lecture is held in.
    pub classroom_id: i64,
}

/// Places every lecture instance with a single first-fit pass.
///
/// Lectures are processed in demand order. For each one, slots are tried in
/// the run's shared order; the first slot admitted by the class, faculty and
/// subject-day ledgers that also has a free classroom (scanned in load order)
/// wins. There is no backtracking.
///
/// # Arguments
///
/// * `lectures` - Lecture instances in demand order
/// * `slot_order` - The run's randomized slot traversal
/// * `classrooms` - Candidate rooms in load order
/// * `ledgers` - Occupancy state, with breaks already blocked
///
/// # Errors
///
/// Returns `CoreError::UnplaceableLecture` for the first lecture that fits
/// nowhere. Placements made so far are discarded by the caller.
pub fn assign_lectures(
    lectures: &[LectureInstance],
    slot_order: &[TimeSlot],
    classrooms: &[Classroom],
    ledgers: &mut Ledgers,
) -> Result<Vec<Placement>, CoreError> {
    let mut placements: Vec<Placement> = Vec::with_capacity(lectures.len());

    for lecture in lectures {
        let placement: Placement = place_one(lecture, slot_order, classrooms, ledgers).ok_or(
            CoreError::UnplaceableLecture {
                class_id: lecture.class_id,
                subject_id: lecture.subject_id,
                faculty_id: lecture.faculty_id,
            },
        )?;
        ledgers.commit(lecture, placement.slot, placement.classroom_id);
        placements.push(placement);
    }

    Ok(placements)
}

fn place_one(
    lecture: &LectureInstance,
    slot_order: &[TimeSlot],
    classrooms: &[Classroom],
    ledgers: &Ledgers,
) -> Option<Placement> {
    slot_order
        .iter()
        .filter(|slot| ledgers.is_slot_clear(lecture, **slot))
        .find_map(|slot| {
            classrooms
                .iter()
                .find(|room| ledgers.is_classroom_free(room.classroom_id, *slot))
                .map(|room| Placement {
                    slot: *slot,
                    lecture: *lecture,
                    classroom_id: room.classroom_id,
                })
        })
}
