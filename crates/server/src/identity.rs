// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity extraction.
//!
//! The upstream identity provider authenticates the caller and forwards
//! the result as request headers:
//!
//! | Header | Required | Value |
//! |--------|----------|-------|
//! | `X-Caller-Id` | yes | integer user id |
//! | `X-Caller-Role` | yes | `admin`, `faculty`, `student`, ... |
//! | `X-Caller-Department` | no | department code |
//! | `X-Caller-Admin-Scope` | no | department code or `*` |

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use campus_timetable_api::{AuthenticatedCaller, AuthenticationService, IdentityClaims};
use tracing::{debug, warn};

use crate::{AppState, HttpError};

pub const CALLER_ID_HEADER: &str = "x-caller-id";
pub const CALLER_ROLE_HEADER: &str = "x-caller-role";
pub const CALLER_DEPARTMENT_HEADER: &str = "x-caller-department";
pub const CALLER_ADMIN_SCOPE_HEADER: &str = "x-caller-admin-scope";

/// Extractor for the authenticated caller.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     Caller(caller): Caller,
/// ) -> Result<Json<Response>, HttpError> {
///     // caller: AuthenticatedCaller
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the id or role header is missing or malformed,
/// or an optional header carries an invalid value.
pub struct Caller(pub AuthenticatedCaller);

impl FromRequestParts<AppState> for Caller {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = IdentityClaims {
            caller_id: header(&parts.headers, CALLER_ID_HEADER),
            role: header(&parts.headers, CALLER_ROLE_HEADER),
            department: header(&parts.headers, CALLER_DEPARTMENT_HEADER),
            admin_scope: header(&parts.headers, CALLER_ADMIN_SCOPE_HEADER),
        };

        let caller: AuthenticatedCaller =
            AuthenticationService::authenticate(&claims).map_err(|e| {
                warn!(error = %e, "Caller identity rejected");
                HttpError::from(campus_timetable_api::ApiError::from(e))
            })?;

        debug!(
            user_id = caller.user_id,
            role = caller.role.as_str(),
            "Caller identified"
        );

        Ok(Self(caller))
    }
}

/// Returns a header as text. Non-UTF-8 values count as absent.
fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
