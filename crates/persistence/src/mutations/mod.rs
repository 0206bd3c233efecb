// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `catalog`: per-entity catalog upserts
//! - `import`: transactional bulk catalog import
//! - `timetables`: atomic replacement of generated timetables

pub mod catalog;
pub mod import;
pub mod timetables;

pub use catalog::{
    upsert_class_section_mysql, upsert_class_section_sqlite, upsert_classroom_mysql,
    upsert_classroom_sqlite, upsert_faculty_member_mysql, upsert_faculty_member_sqlite,
    upsert_student_mysql, upsert_student_sqlite, upsert_subject_mysql, upsert_subject_sqlite,
};
pub use import::{import_catalog_mysql, import_catalog_sqlite};
pub use timetables::{replace_timetables_mysql, replace_timetables_sqlite};
