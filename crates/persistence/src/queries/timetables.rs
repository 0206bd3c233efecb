// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisted timetable queries.

use campus_timetable_domain::Timetable;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{TimetableEntryRow, TimetableRow, timetable_from_rows};
use crate::diesel_schema::{timetable_entries, timetables};
use crate::error::PersistenceError;

backend_fn! {
/// Loads the timetable of one class, if one has been generated.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn get_timetable(
    conn: &mut _,
    class_id: i64,
) -> Result<Option<Timetable>, PersistenceError> {
    let Some(row) = timetables::table
        .filter(timetables::class_id.eq(class_id))
        .select((
            timetables::class_id,
            timetables::department,
            timetables::generated_at,
        ))
        .first::<TimetableRow>(conn)
        .optional()?
    else {
        return Ok(None);
    };

    let entries: Vec<TimetableEntryRow> = timetable_entries::table
        .filter(timetable_entries::class_id.eq(class_id))
        .select((
            timetable_entries::class_id,
            timetable_entries::slot_id,
            timetable_entries::subject_id,
            timetable_entries::faculty_id,
            timetable_entries::classroom_id,
        ))
        .load::<TimetableEntryRow>(conn)?;

    timetable_from_rows(row, &entries).map(Some)
}
}

backend_fn! {
/// Loads every timetable of a department, ordered by class id.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_timetables(
    conn: &mut _,
    department: &str,
) -> Result<Vec<Timetable>, PersistenceError> {
    let rows: Vec<TimetableRow> = timetables::table
        .filter(timetables::department.eq(department))
        .order(timetables::class_id.asc())
        .select((
            timetables::class_id,
            timetables::department,
            timetables::generated_at,
        ))
        .load::<TimetableRow>(conn)?;

    let class_ids: Vec<i64> = rows.iter().map(|row| row.0).collect();
    let entries: Vec<TimetableEntryRow> = timetable_entries::table
        .filter(timetable_entries::class_id.eq_any(&class_ids))
        .select((
            timetable_entries::class_id,
            timetable_entries::slot_id,
            timetable_entries::subject_id,
            timetable_entries::faculty_id,
            timetable_entries::classroom_id,
        ))
        .load::<TimetableEntryRow>(conn)?;

    rows.into_iter()
        .map(|row| timetable_from_rows(row, &entries))
        .collect()
}
}
