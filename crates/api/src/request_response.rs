// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// API request to generate the timetables of one department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTimetableRequest {
    /// The department to schedule. Defaults to the caller's admin scope.
    #[serde(default)]
    pub department: Option<String>,
    /// Seed for the run's randomness. A fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// API response for a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTimetableResponse {
    /// Always `true`; failures are reported as errors.
    pub success: bool,
    /// A success message.
    pub message: String,
    /// The scheduled department.
    pub department: String,
    /// Number of class timetables written.
    pub classes_scheduled: usize,
    /// Total lectures placed.
    pub lectures_placed: usize,
    /// The seed that reproduces this run.
    pub seed: u64,
}
