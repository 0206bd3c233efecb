// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-shaped denormalization of persisted timetables.
//!
//! Persisted timetables carry only identifiers. The reader joins them against
//! a [`Catalog`] snapshot to produce display values. A reference whose
//! catalog entity no longer exists resolves to `None` instead of failing.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use campus_timetable_domain::{
    ClassSection, Classroom, FacultyMember, ScheduleEntry, Subject, TimeSlot, Timetable,
};
use serde::Serialize;

/// Identifiers referenced by a set of schedule entries.
///
/// Used to batch catalog lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencedIds {
    /// Subject ids.
    pub subject_ids: BTreeSet<i64>,
    /// Faculty ids.
    pub faculty_ids: BTreeSet<i64>,
    /// Classroom ids.
    pub classroom_ids: BTreeSet<i64>,
}

/// Collects the distinct catalog ids referenced by the given entries.
#[must_use]
pub fn referenced_ids<'a, I>(entries: I) -> ReferencedIds
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    let mut ids: ReferencedIds = ReferencedIds::default();
    for entry in entries {
        ids.subject_ids.insert(entry.subject_id);
        ids.faculty_ids.insert(entry.faculty_id);
        ids.classroom_ids.insert(entry.classroom_id);
    }
    ids
}

/// A snapshot of catalog entities keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    subjects: HashMap<i64, Subject>,
    faculty: HashMap<i64, FacultyMember>,
    classrooms: HashMap<i64, Classroom>,
    class_names: HashMap<i64, String>,
}

impl Catalog {
    /// Builds a catalog snapshot from loaded entities.
    #[must_use]
    pub fn new(
        subjects: Vec<Subject>,
        faculty: Vec<FacultyMember>,
        classrooms: Vec<Classroom>,
        classes: &[ClassSection],
    ) -> Self {
        Self {
            subjects: subjects.into_iter().map(|s| (s.subject_id, s)).collect(),
            faculty: faculty.into_iter().map(|f| (f.faculty_id, f)).collect(),
            classrooms: classrooms
                .into_iter()
                .map(|c| (c.classroom_id, c))
                .collect(),
            class_names: classes
                .iter()
                .map(|c| (c.class_id, c.display_name()))
                .collect(),
        }
    }

    /// Returns the display name of a class, if known.
    #[must_use]
    pub fn class_name(&self, class_id: i64) -> Option<String> {
        self.class_names.get(&class_id).cloned()
    }

    /// Resolves one schedule entry to display values.
    #[must_use]
    pub fn resolve(&self, entry: &ScheduleEntry) -> ResolvedEntry {
        let subject: Option<&Subject> = self.subjects.get(&entry.subject_id);
        ResolvedEntry {
            subject_id: entry.subject_id,
            subject_code: subject.map(|s| s.subject_code.clone()),
            subject_name: subject.map(|s| s.name.clone()),
            faculty_id: entry.faculty_id,
            faculty_name: self.faculty.get(&entry.faculty_id).map(|f| f.name.clone()),
            classroom_id: entry.classroom_id,
            room_number: self
                .classrooms
                .get(&entry.classroom_id)
                .map(|c| c.room_number.clone()),
        }
    }
}

/// A schedule entry with display values attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// The subject taught.
    pub subject_id: i64,
    /// The subject code, if the subject still exists.
    pub subject_code: Option<String>,
    /// The subject name, if the subject still exists.
    pub subject_name: Option<String>,
    /// The assigned faculty member.
    pub faculty_id: i64,
    /// The faculty member's name, if they still exist.
    pub faculty_name: Option<String>,
    /// The assigned classroom.
    pub classroom_id: i64,
    /// The room number, if the classroom still exists.
    pub room_number: Option<String>,
}

/// A faculty-view entry: the resolved lecture plus the class it is taught to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultySlot {
    /// The resolved lecture.
    #[serde(flatten)]
    pub entry: ResolvedEntry,
    /// The class the lecture is taught to.
    pub class_id: i64,
    /// The class display name, if the class still exists.
    pub class_name: Option<String>,
}

/// A role-shaped timetable view.
///
/// Serialized with a `type` discriminator of `student` or `faculty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScheduleView {
    /// The timetable of the student's own class.
    Student {
        /// The display name of the student's class, if any.
        class_name: Option<String>,
        /// The class schedule keyed by slot.
        schedule: BTreeMap<TimeSlot, ResolvedEntry>,
    },
    /// Every slot the faculty member teaches across the department.
    Faculty {
        /// The merged schedule keyed by slot.
        schedule: BTreeMap<TimeSlot, FacultySlot>,
    },
}

impl ScheduleView {
    /// Returns the number of scheduled slots in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Student { schedule, .. } => schedule.len(),
            Self::Faculty { schedule } => schedule.len(),
        }
    }

    /// Returns whether the view has no scheduled slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the student view of a class timetable.
///
/// A student without a class, or whose class has no timetable yet, gets an
/// empty schedule.
#[must_use]
pub fn student_view(
    class_name: Option<String>,
    timetable: Option<&Timetable>,
    catalog: &Catalog,
) -> ScheduleView {
    let schedule: BTreeMap<TimeSlot, ResolvedEntry> = timetable
        .map(|t| {
            t.schedule
                .iter()
                .map(|(slot, entry)| (*slot, catalog.resolve(entry)))
                .collect()
        })
        .unwrap_or_default();

    ScheduleView::Student {
        class_name,
        schedule,
    }
}

/// Returns the raw entries taught by a faculty member, merged across every
/// timetable and keyed by slot.
///
/// Timetables are merged in order and a later entry for the same slot
/// replaces an earlier one. A valid generation never produces such a
/// collision.
#[must_use]
pub fn faculty_entries(
    faculty_id: i64,
    timetables: &[Timetable],
) -> BTreeMap<TimeSlot, (i64, ScheduleEntry)> {
    let mut merged: BTreeMap<TimeSlot, (i64, ScheduleEntry)> = BTreeMap::new();
    for timetable in timetables {
        for (slot, entry) in timetable.slots_for_faculty(faculty_id) {
            merged.insert(*slot, (timetable.class_id, *entry));
        }
    }
    merged
}

/// Builds the faculty view from every timetable of the faculty's department.
#[must_use]
pub fn faculty_view(faculty_id: i64, timetables: &[Timetable], catalog: &Catalog) -> ScheduleView {
    let schedule: BTreeMap<TimeSlot, FacultySlot> = faculty_entries(faculty_id, timetables)
        .into_iter()
        .map(|(slot, (class_id, entry))| {
            (
                slot,
                FacultySlot {
                    entry: catalog.resolve(&entry),
                    class_id,
                    class_name: catalog.class_name(class_id),
                },
            )
        })
        .collect();

    ScheduleView::Faculty { schedule }
}
