// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy ledgers for a single generation run.
//!
//! Four independent ledgers track what has been committed so far:
//!
//! - class → occupied slots (lectures and breaks)
//! - faculty → occupied slots
//! - classroom → occupied slots
//! - (subject, class) → days the subject is already taught to the class
//!
//! Ledgers are created empty at the start of a run and dropped at its end.

use std::collections::{HashMap, HashSet};

use campus_timetable_domain::{TimeSlot, Weekday};

use crate::demand::LectureInstance;

/// Request-scoped occupancy state.
#[derive(Debug, Clone, Default)]
pub struct Ledgers {
    class_slots: HashMap<i64, HashSet<TimeSlot>>,
    faculty_slots: HashMap<i64, HashSet<TimeSlot>>,
    classroom_slots: HashMap<i64, HashSet<TimeSlot>>,
    subject_days: HashMap<(i64, i64), HashSet<Weekday>>,
}

impl Ledgers {
    /// Creates empty ledgers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a slot as unavailable for a class without assigning a lecture.
    ///
    /// Used for breaks.
    pub fn block_class_slot(&mut self, class_id: i64, slot: TimeSlot) {
        self.class_slots.entry(class_id).or_default().insert(slot);
    }

    /// Returns whether the class already occupies the slot.
    #[must_use]
    pub fn is_class_busy(&self, class_id: i64, slot: TimeSlot) -> bool {
        self.class_slots
            .get(&class_id)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Returns whether the faculty member already teaches in the slot.
    #[must_use]
    pub fn is_faculty_busy(&self, faculty_id: i64, slot: TimeSlot) -> bool {
        self.faculty_slots
            .get(&faculty_id)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Returns whether the classroom is free in the slot.
    #[must_use]
    pub fn is_classroom_free(&self, classroom_id: i64, slot: TimeSlot) -> bool {
        self.classroom_slots
            .get(&classroom_id)
            .is_none_or(|slots| !slots.contains(&slot))
    }

    /// Returns whether the subject is already taught to the class on the day.
    #[must_use]
    pub fn is_subject_taught_on(&self, subject_id: i64, class_id: i64, day: Weekday) -> bool {
        self.subject_days
            .get(&(subject_id, class_id))
            .is_some_and(|days| days.contains(&day))
    }

    /// Returns whether the class, faculty and subject-day ledgers all admit
    /// the lecture in the slot. Classroom availability is checked separately.
    #[must_use]
    pub fn is_slot_clear(&self, lecture: &LectureInstance, slot: TimeSlot) -> bool {
        !self.is_class_busy(lecture.class_id, slot)
            && !self.is_faculty_busy(lecture.faculty_id, slot)
            && !self.is_subject_taught_on(lecture.subject_id, lecture.class_id, slot.day)
    }

    /// Records a placed lecture in all four ledgers.
    pub fn commit(&mut self, lecture: &LectureInstance, slot: TimeSlot, classroom_id: i64) {
        self.class_slots
            .entry(lecture.class_id)
            .or_default()
            .insert(slot);
        self.faculty_slots
            .entry(lecture.faculty_id)
            .or_default()
            .insert(slot);
        self.classroom_slots
            .entry(classroom_id)
            .or_default()
            .insert(slot);
        self.subject_days
            .entry((lecture.subject_id, lecture.class_id))
            .or_default()
            .insert(slot.day);
    }
}
