// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for `MariaDB`/`MySQL`.
//!
//! These tests check schema compatibility, not scheduling rules: migrations
//! apply, foreign keys and unique constraints are enforced, and the
//! transactional timetable replacement behaves as it does on `SQLite`.
//!
//! They are marked `#[ignore]` and run only via `cargo xtask test-mariadb`,
//! which provides:
//! - `DATABASE_URL` pointing at a disposable `MariaDB` instance
//! - `TIMETABLE_TEST_BACKEND=mariadb`
//!
//! Tests share one database, so each uses its own id range.

use diesel::prelude::*;
use std::env;

use super::{create_test_fixture, create_test_timetable};
use crate::Persistence;
use crate::backend::mysql;

/// Returns the `MariaDB` connection URL.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

/// Verifies we are running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `TIMETABLE_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend = env::var("TIMETABLE_TEST_BACKEND").expect(
        "TIMETABLE_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(backend, "mariadb", "TIMETABLE_TEST_BACKEND must be 'mariadb'");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = mysql::initialize_database(&url);
    assert!(
        result.is_ok(),
        "Failed to initialize MariaDB and run migrations: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_foreign_key_enforcement() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    assert!(mysql::verify_foreign_key_enforcement(&mut conn).is_ok());

    let orphan = diesel::sql_query(
        "INSERT INTO curriculum_entries
         (class_id, position, subject_id, faculty_id, lectures_per_week)
         VALUES (99999, 0, 99999, 99999, 1)",
    )
    .execute(&mut conn);
    assert!(
        orphan.is_err(),
        "Curriculum entry for a missing class must violate its foreign key"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_catalog_round_trip() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut persistence = Persistence::new_with_mysql(&url).expect("Failed to open MariaDB");
    let fixture = create_test_fixture();

    persistence.import_catalog(&fixture).expect("Import failed");
    // Importing twice must update rather than duplicate
    persistence
        .import_catalog(&fixture)
        .expect("Re-import failed");

    let department = fixture.classes[0].department.clone();
    let classes = persistence
        .list_class_sections(&department)
        .expect("Failed to list classes");
    assert_eq!(classes, fixture.classes);
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_timetable_replace_is_atomic() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut persistence = Persistence::new_with_mysql(&url).expect("Failed to open MariaDB");
    persistence
        .import_catalog(&create_test_fixture())
        .expect("Import failed");

    let original = create_test_timetable(1, &[("Monday-08:30 AM", 10, 100, 901)]);
    persistence
        .replace_timetables(std::slice::from_ref(&original))
        .expect("Initial replace failed");

    let result = persistence.replace_timetables(&[
        create_test_timetable(1, &[("Friday-08:30 AM", 11, 101, 902)]),
        create_test_timetable(99999, &[("Friday-08:30 AM", 11, 101, 902)]),
    ]);

    assert!(result.is_err());
    assert_eq!(
        persistence.get_timetable(1).expect("Query failed"),
        Some(original)
    );
}
