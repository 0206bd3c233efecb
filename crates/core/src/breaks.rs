// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use campus_timetable_domain::{ClassSection, SlotTime, TimeSlot, Weekday};
use rand::seq::IndexedRandom;

use crate::ledger::Ledgers;

/// Reserves one break time per class and blocks it on every teaching day.
///
/// Each class independently draws one time from the break-eligible pool. The
/// chosen time is marked in the class ledger on all five days before any
/// lecture is placed.
///
/// # Returns
///
/// The break time chosen for each class, keyed by class id.
pub fn allocate_breaks<R: rand::Rng + ?Sized>(
    classes: &[ClassSection],
    ledgers: &mut Ledgers,
    rng: &mut R,
) -> BTreeMap<i64, SlotTime> {
    let mut breaks: BTreeMap<i64, SlotTime> = BTreeMap::new();

    for class in classes {
        let time: SlotTime = SlotTime::BREAK_ELIGIBLE
            .choose(rng)
            .copied()
            .unwrap_or(SlotTime::BREAK_ELIGIBLE[0]);

        for day in Weekday::ALL {
            ledgers.block_class_slot(class.class_id, TimeSlot::new(day, time));
        }
        breaks.insert(class.class_id, time);
    }

    breaks
}
