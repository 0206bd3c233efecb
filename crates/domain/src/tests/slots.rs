// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, HashSet};

use crate::{DomainError, ScheduleEntry, SlotTime, TimeSlot, Weekday, slot_universe};

#[test]
fn test_slot_universe_has_forty_unique_slots() {
    let universe: Vec<TimeSlot> = slot_universe();
    assert_eq!(universe.len(), 40);

    let unique: HashSet<TimeSlot> = universe.iter().copied().collect();
    assert_eq!(unique.len(), 40);
}

#[test]
fn test_slot_universe_is_day_major() {
    let universe: Vec<TimeSlot> = slot_universe();
    assert_eq!(universe[0].to_string(), "Monday-08:30 AM");
    assert_eq!(universe[7].to_string(), "Monday-03:30 PM");
    assert_eq!(universe[8].to_string(), "Tuesday-08:30 AM");
    assert_eq!(universe[39].to_string(), "Friday-03:30 PM");
}

#[test]
fn test_slot_id_round_trips_through_parse() {
    let slot: TimeSlot = "Wednesday-12:30 PM".parse().unwrap();
    assert_eq!(slot.day, Weekday::Wednesday);
    assert_eq!(slot.time.label(), "12:30 PM");
    assert_eq!(slot.to_string(), "Wednesday-12:30 PM");
}

#[test]
fn test_slot_id_rejects_unknown_day() {
    let result: Result<TimeSlot, DomainError> = "Saturday-08:30 AM".parse();
    assert!(matches!(result, Err(DomainError::InvalidSlotId(_))));
}

#[test]
fn test_slot_id_rejects_time_off_ladder() {
    let result: Result<TimeSlot, DomainError> = "Monday-08:00 AM".parse();
    assert!(matches!(result, Err(DomainError::InvalidSlotId(_))));
}

#[test]
fn test_slot_id_rejects_missing_separator() {
    let result: Result<TimeSlot, DomainError> = "Monday 08:30 AM".parse();
    assert!(matches!(result, Err(DomainError::InvalidSlotId(_))));
}

#[test]
fn test_break_eligible_times_are_midday() {
    let labels: Vec<&str> = SlotTime::BREAK_ELIGIBLE
        .iter()
        .map(SlotTime::label)
        .collect();
    assert_eq!(labels, vec!["11:30 AM", "12:30 PM", "01:30 PM"]);
    assert!(!SlotTime::ALL[0].is_break_eligible());
    assert!(SlotTime::ALL[4].is_break_eligible());
}

#[test]
fn test_slot_time_ordering_follows_teaching_day() {
    let morning: SlotTime = "10:30 AM".parse().unwrap();
    let afternoon: SlotTime = "01:30 PM".parse().unwrap();
    assert!(morning < afternoon);
}

#[test]
fn test_time_slot_serializes_as_map_key() {
    let slot: TimeSlot = TimeSlot::new(Weekday::Friday, SlotTime::ALL[5]);
    let mut schedule: BTreeMap<TimeSlot, ScheduleEntry> = BTreeMap::new();
    schedule.insert(
        slot,
        ScheduleEntry {
            subject_id: 1,
            faculty_id: 2,
            classroom_id: 3,
        },
    );

    let json: String = serde_json::to_string(&schedule).unwrap();
    assert_eq!(
        json,
        r#"{"Friday-01:30 PM":{"subject_id":1,"faculty_id":2,"classroom_id":3}}"#
    );

    let decoded: BTreeMap<TimeSlot, ScheduleEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, schedule);
}
