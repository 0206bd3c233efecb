// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! API boundary for the campus timetable service.
//!
//! Validates caller identity, enforces role-based authorization, resolves
//! the target department, and translates core and persistence failures
//! into the HTTP-facing [`ApiError`] taxonomy. Transport lives in the
//! server crate.

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AdminScope, AuthenticatedCaller, AuthenticationService, AuthorizationService, CallerRole,
    IdentityClaims,
};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    GenerationInput, choose_seed, generate_timetable, get_timetable, load_generation_input,
    resolve_department, run_generation, store_generation,
};
pub use request_response::{GenerateTimetableRequest, GenerateTimetableResponse};

// Response shape of `get_timetable`
pub use campus_timetable::ScheduleView;
