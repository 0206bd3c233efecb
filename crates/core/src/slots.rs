// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_timetable_domain::{TimeSlot, slot_universe};
use rand::seq::SliceRandom;

/// Returns the 40-slot universe in a random order.
///
/// Exactly one order is drawn per generation run and shared by every lecture
/// instance in that run.
pub fn shuffled_slot_order<R: rand::Rng + ?Sized>(rng: &mut R) -> Vec<TimeSlot> {
    let mut order: Vec<TimeSlot> = slot_universe();
    order.shuffle(rng);
    order
}
