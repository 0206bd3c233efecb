// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed weekly teaching grid.
//!
//! The grid is a global constant: five teaching days and eight lecture start
//! times from 08:30 AM to 03:30 PM in one-hour steps, for 40 slots in total.
//! It is never derived from data.
//!
//! ## Wire Format
//!
//! A slot is identified on the wire by `"<Day>-<HH:MM AM/PM>"`, for example
//! `"Monday-08:30 AM"` or `"Friday-01:30 PM"`. Persisted timetables and API
//! responses use this exact form as map keys.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The number of teaching days in the grid.
pub const DAYS_PER_WEEK: usize = 5;

/// The number of lecture start times per day.
pub const SLOTS_PER_DAY: usize = 8;

/// Start time labels, in teaching order.
const TIME_LABELS: [&str; SLOTS_PER_DAY] = [
    "08:30 AM", "09:30 AM", "10:30 AM", "11:30 AM", "12:30 PM", "01:30 PM", "02:30 PM", "03:30 PM",
];

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days in calendar order.
    pub const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Returns the day name used in slot identifiers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| DomainError::InvalidWeekday(s.to_string()))
    }
}

/// A lecture start time on the teaching ladder.
///
/// Ordering follows the teaching day, so `08:30 AM` sorts before `01:30 PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(u8);

impl SlotTime {
    /// Every start time, earliest first.
    pub const ALL: [Self; SLOTS_PER_DAY] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Mid-day start times a class break may be placed at:
    /// 11:30 AM, 12:30 PM and 01:30 PM.
    pub const BREAK_ELIGIBLE: [Self; 3] = [Self(3), Self(4), Self(5)];

    /// Returns the time at the given position on the ladder.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SLOTS_PER_DAY {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the wire label, e.g. `08:30 AM`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        TIME_LABELS[self.0 as usize]
    }

    /// Returns whether a class break may be placed at this time.
    #[must_use]
    pub fn is_break_eligible(&self) -> bool {
        Self::BREAK_ELIGIBLE.contains(self)
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SlotTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TIME_LABELS
            .iter()
            .position(|label| *label == s)
            .and_then(Self::from_index)
            .ok_or_else(|| DomainError::InvalidSlotTime(s.to_string()))
    }
}

/// A `(day, time)` coordinate in the weekly grid.
///
/// Serializes as its wire identifier so it can key JSON maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    /// The teaching day.
    pub day: Weekday,
    /// The start time.
    pub time: SlotTime,
}

impl TimeSlot {
    /// Creates a new slot.
    #[must_use]
    pub const fn new(day: Weekday, time: SlotTime) -> Self {
        Self { day, time }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.day, self.time)
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time) = s
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidSlotId(s.to_string()))?;
        let day: Weekday = day
            .parse()
            .map_err(|_| DomainError::InvalidSlotId(s.to_string()))?;
        let time: SlotTime = time
            .parse()
            .map_err(|_| DomainError::InvalidSlotId(s.to_string()))?;
        Ok(Self { day, time })
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Builds the full 40-slot universe in day-major order.
#[must_use]
pub fn slot_universe() -> Vec<TimeSlot> {
    Weekday::ALL
        .into_iter()
        .flat_map(|day| {
            SlotTime::ALL
                .into_iter()
                .map(move |time| TimeSlot::new(day, time))
        })
        .collect()
}
