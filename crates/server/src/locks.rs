// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-department generation locks.
//!
//! Two generations for the same department must not interleave their
//! load, place and commit steps. Generations for different departments
//! run independently.

use std::collections::HashMap;
use std::sync::Arc;

use campus_timetable_domain::DepartmentCode;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

/// Registry of one advisory lock per department.
#[derive(Clone, Default)]
pub struct DepartmentLocks {
    locks: Arc<Mutex<HashMap<DepartmentCode, Arc<Mutex<()>>>>>,
}

impl DepartmentLocks {
    /// Creates an empty lock registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the generation lock of a department.
    ///
    /// The lock is held until the returned guard is dropped.
    pub async fn acquire(&self, department: &DepartmentCode) -> OwnedMutexGuard<()> {
        let lock: Arc<Mutex<()>> = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(department.clone()).or_default())
        };

        let guard: OwnedMutexGuard<()> = lock.lock_owned().await;
        debug!(department = %department, "Acquired generation lock");
        guard
    }
}
