// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timetable writes.
//!
//! Generated timetables always replace the previous ones for the same
//! classes. The whole batch is written in one transaction, so readers see
//! either every old timetable or every new one.

use campus_timetable_domain::Timetable;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::format_generated_at;
use crate::diesel_schema::{timetable_entries, timetables};
use crate::error::PersistenceError;

backend_fn! {
/// Replaces the stored timetables of every class in `batch`.
///
/// Classes not in `batch` keep their timetables. Returns the number of
/// schedule entries written.
///
/// # Errors
///
/// Returns an error if any write fails; no timetable is changed in that case.
pub fn replace_timetables(
    conn: &mut _,
    batch: &[Timetable],
) -> Result<usize, PersistenceError> {
    let written: usize = conn.transaction::<_, PersistenceError, _>(|conn| {
        let mut written: usize = 0;

        for timetable in batch {
            diesel::delete(
                timetable_entries::table.filter(timetable_entries::class_id.eq(timetable.class_id)),
            )
            .execute(conn)?;
            diesel::delete(timetables::table.filter(timetables::class_id.eq(timetable.class_id)))
                .execute(conn)?;

            diesel::insert_into(timetables::table)
                .values((
                    timetables::class_id.eq(timetable.class_id),
                    timetables::department.eq(timetable.department.as_str()),
                    timetables::generated_at.eq(format_generated_at(timetable.generated_at)?),
                ))
                .execute(conn)?;

            for (slot, entry) in &timetable.schedule {
                diesel::insert_into(timetable_entries::table)
                    .values((
                        timetable_entries::class_id.eq(timetable.class_id),
                        timetable_entries::slot_id.eq(slot.to_string()),
                        timetable_entries::subject_id.eq(entry.subject_id),
                        timetable_entries::faculty_id.eq(entry.faculty_id),
                        timetable_entries::classroom_id.eq(entry.classroom_id),
                    ))
                    .execute(conn)?;
            }

            debug!(
                class_id = timetable.class_id,
                entries = timetable.schedule.len(),
                "Replaced class timetable"
            );
            written += timetable.schedule.len();
        }

        Ok(written)
    })?;

    info!(timetables = batch.len(), entries = written, "Stored generated timetables");
    Ok(written)
}
}
