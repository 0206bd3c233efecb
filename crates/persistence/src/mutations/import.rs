// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk catalog import.
//!
//! Entities are written in dependency order: classrooms, subjects and
//! faculty first, then class sections (whose curricula reference subjects
//! and faculty), then students (who reference class sections). The import
//! runs in one transaction; a failure leaves the catalog untouched.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use super::catalog::{
    upsert_class_section_mysql, upsert_class_section_sqlite, upsert_classroom_mysql,
    upsert_classroom_sqlite, upsert_faculty_member_mysql, upsert_faculty_member_sqlite,
    upsert_student_mysql, upsert_student_sqlite, upsert_subject_mysql, upsert_subject_sqlite,
};
use crate::data_models::{CatalogFixture, CatalogImportSummary};
use crate::error::PersistenceError;

fn summarize(fixture: &CatalogFixture) -> CatalogImportSummary {
    CatalogImportSummary {
        classrooms: fixture.classrooms.len(),
        subjects: fixture.subjects.len(),
        faculty: fixture.faculty.len(),
        classes: fixture.classes.len(),
        students: fixture.students.len(),
    }
}

/// Imports a catalog fixture (`SQLite` version).
///
/// # Errors
///
/// Returns an error if any write fails. Nothing is written in that case.
pub fn import_catalog_sqlite(
    conn: &mut SqliteConnection,
    fixture: &CatalogFixture,
) -> Result<CatalogImportSummary, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        for classroom in &fixture.classrooms {
            upsert_classroom_sqlite(conn, classroom)?;
        }
        for subject in &fixture.subjects {
            upsert_subject_sqlite(conn, subject)?;
        }
        for member in &fixture.faculty {
            upsert_faculty_member_sqlite(conn, member)?;
        }
        for class in &fixture.classes {
            upsert_class_section_sqlite(conn, class)?;
        }
        for student in &fixture.students {
            upsert_student_sqlite(conn, student)?;
        }
        Ok(())
    })?;

    let summary: CatalogImportSummary = summarize(fixture);
    info!(?summary, "Imported catalog");
    Ok(summary)
}

/// Imports a catalog fixture (`MySQL` version).
///
/// # Errors
///
/// Returns an error if any write fails. Nothing is written in that case.
pub fn import_catalog_mysql(
    conn: &mut MysqlConnection,
    fixture: &CatalogFixture,
) -> Result<CatalogImportSummary, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        for classroom in &fixture.classrooms {
            upsert_classroom_mysql(conn, classroom)?;
        }
        for subject in &fixture.subjects {
            upsert_subject_mysql(conn, subject)?;
        }
        for member in &fixture.faculty {
            upsert_faculty_member_mysql(conn, member)?;
        }
        for class in &fixture.classes {
            upsert_class_section_mysql(conn, class)?;
        }
        for student in &fixture.students {
            upsert_student_mysql(conn, student)?;
        }
        Ok(())
    })?;

    let summary: CatalogImportSummary = summarize(fixture);
    info!(?summary, "Imported catalog");
    Ok(summary)
}
