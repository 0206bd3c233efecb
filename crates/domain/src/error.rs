// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Department code is empty or invalid.
    InvalidDepartment(String),
    /// Class section identifier is empty or invalid.
    InvalidSection(String),
    /// A slot identifier could not be parsed.
    InvalidSlotId(String),
    /// A weekday name is not one of the five teaching days.
    InvalidWeekday(String),
    /// A time label is not on the fixed teaching ladder.
    InvalidSlotTime(String),
    /// A curriculum entry carries an unusable lecture count.
    InvalidLectureCount {
        /// The class the curriculum belongs to.
        class_id: i64,
        /// The subject of the offending entry.
        subject_id: i64,
        /// The raw lecture count.
        count: i64,
    },
    /// A caller role string is empty.
    InvalidRole(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDepartment(msg) => write!(f, "Invalid department: {msg}"),
            Self::InvalidSection(msg) => write!(f, "Invalid section: {msg}"),
            Self::InvalidSlotId(slot_id) => write!(f, "Invalid slot id: '{slot_id}'"),
            Self::InvalidWeekday(day) => {
                write!(f, "Invalid weekday '{day}'. Must be Monday through Friday")
            }
            Self::InvalidSlotTime(time) => {
                write!(f, "Invalid slot time '{time}'. Not on the teaching ladder")
            }
            Self::InvalidLectureCount {
                class_id,
                subject_id,
                count,
            } => {
                write!(
                    f,
                    "Invalid lectures per week {count} for subject {subject_id} in class {class_id}"
                )
            }
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
