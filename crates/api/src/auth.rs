// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity and authorization.
//!
//! Identity is established by an external provider. This module only
//! validates the identity fields it hands over and decides which timetable
//! operations a caller may perform.

use campus_timetable_domain::{DepartmentCode, DomainError};

use crate::error::AuthError;

/// Caller roles, as asserted by the identity provider.
///
/// Roles the timetable service does not act on are kept verbatim in
/// [`CallerRole::Other`]; such callers read an empty timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerRole {
    /// Department administrators. May generate timetables.
    Admin,
    /// Faculty members. Read the slots they teach.
    Faculty,
    /// Students. Read their class timetable.
    Student,
    /// Any other role.
    Other(String),
}

impl CallerRole {
    /// Parses a role string case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the role is empty.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let role: String = raw.trim().to_lowercase();
        match role.as_str() {
            "" => Err(DomainError::InvalidRole(String::from(
                "Role cannot be empty",
            ))),
            "admin" => Ok(Self::Admin),
            "faculty" => Ok(Self::Faculty),
            "student" => Ok(Self::Student),
            _ => Ok(Self::Other(role)),
        }
    }

    /// Returns the role name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
            Self::Student => "student",
            Self::Other(role) => role,
        }
    }
}

/// The departments an administrator manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminScope {
    /// A single department.
    Department(DepartmentCode),
    /// Every department (`*` or `ALL`).
    All,
}

impl AdminScope {
    /// Parses an admin scope value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a wildcard nor a valid
    /// department code.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        if trimmed == "*" || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        DepartmentCode::new(trimmed).map(Self::Department)
    }
}

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedCaller {
    /// The caller's user id. For students and faculty this is their
    /// catalog id.
    pub user_id: i64,
    /// The caller's role.
    pub role: CallerRole,
    /// The caller's home department, if the provider supplied one.
    pub department: Option<DepartmentCode>,
    /// The administrative scope, for administrators.
    pub admin_scope: Option<AdminScope>,
}

impl AuthenticatedCaller {
    /// Creates a caller with no department and no admin scope.
    #[must_use]
    pub const fn new(user_id: i64, role: CallerRole) -> Self {
        Self {
            user_id,
            role,
            department: None,
            admin_scope: None,
        }
    }

    /// Sets the home department.
    #[must_use]
    pub fn with_department(mut self, department: DepartmentCode) -> Self {
        self.department = Some(department);
        self
    }

    /// Sets the administrative scope.
    #[must_use]
    pub fn with_admin_scope(mut self, scope: AdminScope) -> Self {
        self.admin_scope = Some(scope);
        self
    }
}

/// Raw identity fields as received from the identity provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityClaims<'a> {
    /// The caller's numeric user id.
    pub caller_id: Option<&'a str>,
    /// The caller's role name.
    pub role: Option<&'a str>,
    /// The caller's home department code.
    pub department: Option<&'a str>,
    /// A department code, or `*` for every department.
    pub admin_scope: Option<&'a str>,
}

/// Authentication service validating identity claims.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Validates identity claims and builds an authenticated caller.
    ///
    /// Empty optional fields are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller id or role is missing or malformed,
    /// or if a supplied department or admin scope is invalid.
    pub fn authenticate(claims: &IdentityClaims<'_>) -> Result<AuthenticatedCaller, AuthError> {
        let raw_id: &str = claims
            .caller_id
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Missing caller id"),
            })?;
        let user_id: i64 = raw_id
            .trim()
            .parse()
            .map_err(|_| AuthError::AuthenticationFailed {
                reason: format!("Invalid caller id: '{raw_id}'"),
            })?;

        let role: CallerRole = claims
            .role
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Missing caller role"),
            })
            .and_then(|raw| {
                CallerRole::parse(raw).map_err(|e| AuthError::AuthenticationFailed {
                    reason: e.to_string(),
                })
            })?;

        let department: Option<DepartmentCode> = non_empty(claims.department)
            .map(DepartmentCode::new)
            .transpose()
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: e.to_string(),
            })?;

        let admin_scope: Option<AdminScope> = non_empty(claims.admin_scope)
            .map(AdminScope::parse)
            .transpose()
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: e.to_string(),
            })?;

        Ok(AuthenticatedCaller {
            user_id,
            role,
            department,
            admin_scope,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if a caller may generate timetables.
    ///
    /// Only administrators may generate.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not an administrator.
    pub fn authorize_generate(caller: &AuthenticatedCaller) -> Result<(), AuthError> {
        match caller.role {
            CallerRole::Admin => Ok(()),
            _ => Err(AuthError::Unauthorized {
                action: String::from("generate_timetable"),
                required_role: String::from("Admin"),
            }),
        }
    }
}
