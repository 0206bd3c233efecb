// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use campus_timetable_domain::{ClassSection, SlotTime, TimeSlot, Weekday};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::helpers::create_test_class;
use crate::{LectureInstance, Ledgers, allocate_breaks, shuffled_slot_order};

fn lecture(class_id: i64, subject_id: i64, faculty_id: i64) -> LectureInstance {
    LectureInstance {
        class_id,
        subject_id,
        faculty_id,
    }
}

#[test]
fn test_commit_blocks_class_faculty_and_room() {
    let mut ledgers: Ledgers = Ledgers::new();
    let slot: TimeSlot = TimeSlot::new(Weekday::Monday, SlotTime::ALL[0]);

    ledgers.commit(&lecture(1, 10, 100), slot, 900);

    assert!(ledgers.is_class_busy(1, slot));
    assert!(ledgers.is_faculty_busy(100, slot));
    assert!(!ledgers.is_classroom_free(900, slot));
    assert!(ledgers.is_classroom_free(901, slot));
}

#[test]
fn test_subject_day_ledger_blocks_whole_day() {
    let mut ledgers: Ledgers = Ledgers::new();
    let morning: TimeSlot = TimeSlot::new(Weekday::Tuesday, SlotTime::ALL[0]);
    let afternoon: TimeSlot = TimeSlot::new(Weekday::Tuesday, SlotTime::ALL[7]);
    let next_day: TimeSlot = TimeSlot::new(Weekday::Wednesday, SlotTime::ALL[7]);

    ledgers.commit(&lecture(1, 10, 100), morning, 900);

    // Same subject, same class, different faculty: still one per day.
    assert!(!ledgers.is_slot_clear(&lecture(1, 10, 200), afternoon));
    assert!(ledgers.is_slot_clear(&lecture(1, 10, 200), next_day));
    // Another class may take the subject the same day.
    assert!(ledgers.is_slot_clear(&lecture(2, 10, 200), afternoon));
}

#[test]
fn test_faculty_busy_rejects_other_class() {
    let mut ledgers: Ledgers = Ledgers::new();
    let slot: TimeSlot = TimeSlot::new(Weekday::Friday, SlotTime::ALL[2]);

    ledgers.commit(&lecture(1, 10, 100), slot, 900);
    assert!(!ledgers.is_slot_clear(&lecture(2, 11, 100), slot));
}

#[test]
fn test_breaks_block_same_time_on_all_days() {
    let classes: Vec<ClassSection> = vec![
        create_test_class(1, Vec::new()),
        create_test_class(2, Vec::new()),
    ];

    for seed in 0..20 {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let mut ledgers: Ledgers = Ledgers::new();
        let breaks: BTreeMap<i64, SlotTime> = allocate_breaks(&classes, &mut ledgers, &mut rng);

        assert_eq!(breaks.len(), 2);
        for (class_id, time) in &breaks {
            assert!(time.is_break_eligible());
            for day in Weekday::ALL {
                assert!(ledgers.is_class_busy(*class_id, TimeSlot::new(day, *time)));
            }
        }
    }
}

#[test]
fn test_shuffled_slot_order_is_permutation() {
    let mut rng: StdRng = StdRng::seed_from_u64(7);
    let mut order: Vec<TimeSlot> = shuffled_slot_order(&mut rng);
    assert_eq!(order.len(), 40);
    order.sort();
    order.dedup();
    assert_eq!(order.len(), 40);
}

#[test]
fn test_shuffled_slot_order_is_seed_deterministic() {
    let first: Vec<TimeSlot> = shuffled_slot_order(&mut StdRng::seed_from_u64(42));
    let second: Vec<TimeSlot> = shuffled_slot_order(&mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}
