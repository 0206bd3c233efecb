// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `catalog`: class sections, classrooms, subjects, faculty, students
//! - `timetables`: persisted class timetables
//!
//! Every query exists as a `_sqlite` and a `_mysql` function; the
//! `Persistence` adapter in `lib.rs` dispatches on the active connection.

pub mod catalog;
pub mod timetables;

pub use catalog::{
    get_class_sections_by_ids_mysql, get_class_sections_by_ids_sqlite,
    get_classrooms_by_ids_mysql, get_classrooms_by_ids_sqlite, get_faculty_by_ids_mysql,
    get_faculty_by_ids_sqlite, get_student_mysql, get_student_sqlite, get_subjects_by_ids_mysql,
    get_subjects_by_ids_sqlite, list_class_sections_mysql, list_class_sections_sqlite,
    list_classrooms_mysql, list_classrooms_sqlite,
};
pub use timetables::{
    get_timetable_mysql, get_timetable_sqlite, list_timetables_mysql, list_timetables_sqlite,
};
