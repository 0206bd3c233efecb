// Copyright (C) 2026 The Campus Timetable Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for timetable generation and retrieval.
//!
//! Generation is split into three steps so a caller holding a shared
//! connection can release it while the greedy pass runs:
//!
//! 1. [`load_generation_input`] reads classes and classrooms
//! 2. [`run_generation`] is pure computation
//! 3. [`store_generation`] commits every timetable in one transaction
//!
//! [`generate_timetable`] chains all three for single-owner callers.

use campus_timetable::{
    Catalog, GenerationResult, ScheduleView, faculty_entries, faculty_view, generate_with_seed,
    referenced_ids, student_view,
};
use campus_timetable_domain::{
    ClassSection, Classroom, DepartmentCode, FacultyMember, ScheduleEntry, SlotTime, Student,
    Subject, Timetable,
};
use campus_timetable_persistence::Persistence;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::auth::{AdminScope, AuthenticatedCaller, AuthorizationService, CallerRole};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{GenerateTimetableRequest, GenerateTimetableResponse};

/// Everything one generation run reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
    /// The department being scheduled.
    pub department: DepartmentCode,
    /// Every class of the department, with curricula.
    pub classes: Vec<ClassSection>,
    /// Every classroom of the department, in load order.
    pub classrooms: Vec<Classroom>,
}

/// Determines which department a generation request targets.
///
/// An administrator scoped to one department may only generate for that
/// department; naming it explicitly is allowed, naming any other is not.
/// A wildcard-scoped administrator must name the department explicitly,
/// and an administrator with no scope may not generate at all.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if no specific department results or
/// the explicit value is not a valid department code, and
/// `ApiError::Unauthorized` if the explicit department lies outside the
/// caller's administrative scope.
pub fn resolve_department(
    caller: &AuthenticatedCaller,
    request: &GenerateTimetableRequest,
) -> Result<DepartmentCode, ApiError> {
    let explicit: Option<DepartmentCode> = match request
        .department
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        Some(raw) => match AdminScope::parse(raw).map_err(translate_domain_error)? {
            AdminScope::Department(department) => Some(department),
            AdminScope::All => return Err(no_specific_department()),
        },
        None => None,
    };

    match (&caller.admin_scope, explicit) {
        (Some(AdminScope::Department(scope)), Some(requested)) if requested != *scope => {
            warn!(
                user_id = caller.user_id,
                scope = %scope,
                requested = %requested,
                "Generation requested outside admin scope"
            );
            Err(ApiError::Unauthorized {
                action: String::from("generate_timetable"),
                required_role: format!("{requested} Admin"),
            })
        }
        (Some(AdminScope::Department(scope)), _) => Ok(scope.clone()),
        (Some(AdminScope::All), Some(requested)) => Ok(requested),
        (None, Some(requested)) => Err(ApiError::Unauthorized {
            action: String::from("generate_timetable"),
            required_role: format!("{requested} Admin"),
        }),
        (Some(AdminScope::All) | None, None) => Err(no_specific_department()),
    }
}

fn no_specific_department() -> ApiError {
    ApiError::InvalidInput {
        field: String::from("department"),
        message: String::from(
            "A specific department is required; supply one or use a department-scoped admin",
        ),
    }
}

/// Loads the classes and classrooms of a department.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the department has no classes,
/// or an internal error if loading fails.
pub fn load_generation_input(
    persistence: &mut Persistence,
    department: &DepartmentCode,
) -> Result<GenerationInput, ApiError> {
    let classes: Vec<ClassSection> = persistence
        .list_class_sections(department)
        .map_err(translate_persistence_error)?;
    if classes.is_empty() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Classes"),
            message: format!("No classes found for department {department}"),
        });
    }

    let classrooms: Vec<Classroom> = persistence
        .list_classrooms(department)
        .map_err(translate_persistence_error)?;

    debug!(
        department = %department,
        classes = classes.len(),
        classrooms = classrooms.len(),
        "Loaded generation input"
    );

    Ok(GenerationInput {
        department: department.clone(),
        classes,
        classrooms,
    })
}

/// Runs the generator over loaded input.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if there is nothing to schedule and
/// `ApiError::SchedulingConflict` if some lecture cannot be placed.
pub fn run_generation(
    input: &GenerationInput,
    seed: u64,
    generated_at: OffsetDateTime,
) -> Result<GenerationResult, ApiError> {
    generate_with_seed(
        &input.department,
        &input.classes,
        &input.classrooms,
        generated_at,
        seed,
    )
    .map_err(|e| {
        warn!(department = %input.department, seed, error = %e, "Timetable generation failed");
        translate_core_error(e)
    })
}

/// Persists a generation result, replacing the department's timetables.
///
/// # Errors
///
/// Returns an internal error if the batch cannot be committed; no
/// timetable changes in that case.
pub fn store_generation(
    persistence: &mut Persistence,
    result: &GenerationResult,
    seed: u64,
) -> Result<GenerateTimetableResponse, ApiError> {
    persistence
        .replace_timetables(&result.timetables)
        .map_err(translate_persistence_error)?;

    for timetable in &result.timetables {
        let break_time: Option<SlotTime> = result.breaks.get(&timetable.class_id).copied();
        debug!(
            class_id = timetable.class_id,
            lectures = timetable.lecture_count(),
            break_time = break_time.map_or("none", |t| t.label()),
            "Stored class timetable"
        );
    }

    info!(
        department = %result.department,
        classes = result.timetables.len(),
        lectures = result.lectures_placed,
        seed,
        "Generated timetable"
    );

    Ok(GenerateTimetableResponse {
        success: true,
        message: format!("Timetable generated for department {}", result.department),
        department: result.department.to_string(),
        classes_scheduled: result.timetables.len(),
        lectures_placed: result.lectures_placed,
        seed,
    })
}

/// Returns the request seed, or a fresh random one.
#[must_use]
pub fn choose_seed(request: &GenerateTimetableRequest) -> u64 {
    request.seed.unwrap_or_else(rand::random::<u64>)
}

/// Generates and stores the timetables of one department.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an administrator
/// - No specific department can be resolved
/// - The department has no classes or nothing to schedule
/// - Some lecture cannot be placed
/// - The timetables cannot be stored
pub fn generate_timetable(
    persistence: &mut Persistence,
    caller: &AuthenticatedCaller,
    request: &GenerateTimetableRequest,
    generated_at: OffsetDateTime,
) -> Result<GenerateTimetableResponse, ApiError> {
    AuthorizationService::authorize_generate(caller)?;
    let department: DepartmentCode = resolve_department(caller, request)?;
    let seed: u64 = choose_seed(request);

    let input: GenerationInput = load_generation_input(persistence, &department)?;
    let result: GenerationResult = run_generation(&input, seed, generated_at)?;
    store_generation(persistence, &result, seed)
}

/// Returns the caller's role-shaped timetable.
///
/// Students receive their class timetable and faculty receive every slot
/// they teach in their department. Other roles receive `None`.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown student, or an
/// internal error if loading fails.
pub fn get_timetable(
    persistence: &mut Persistence,
    caller: &AuthenticatedCaller,
) -> Result<Option<ScheduleView>, ApiError> {
    match caller.role {
        CallerRole::Student => student_schedule(persistence, caller.user_id).map(Some),
        CallerRole::Faculty => faculty_schedule(persistence, caller).map(Some),
        CallerRole::Admin | CallerRole::Other(_) => {
            debug!(role = caller.role.as_str(), "No timetable view for role");
            Ok(None)
        }
    }
}

fn student_schedule(
    persistence: &mut Persistence,
    student_id: i64,
) -> Result<ScheduleView, ApiError> {
    let student: Student = persistence
        .get_student(student_id)
        .map_err(translate_persistence_error)?;

    let Some(class_id) = student.class_id else {
        return Ok(student_view(None, None, &Catalog::default()));
    };

    let timetable: Option<Timetable> = persistence
        .get_timetable(class_id)
        .map_err(translate_persistence_error)?;
    let classes: Vec<ClassSection> = persistence
        .get_class_sections_by_ids(&[class_id])
        .map_err(translate_persistence_error)?;

    let entries: Vec<ScheduleEntry> = timetable
        .iter()
        .flat_map(|t| t.schedule.values().copied())
        .collect();
    let catalog: Catalog = load_catalog(persistence, &entries, &classes)?;

    let view: ScheduleView =
        student_view(catalog.class_name(class_id), timetable.as_ref(), &catalog);
    debug!(
        student_id,
        class_id,
        slots = view.len(),
        "Resolved student timetable"
    );
    Ok(view)
}

fn faculty_schedule(
    persistence: &mut Persistence,
    caller: &AuthenticatedCaller,
) -> Result<ScheduleView, ApiError> {
    let Some(department) = faculty_department(persistence, caller)? else {
        debug!(faculty_id = caller.user_id, "Faculty department unknown");
        return Ok(faculty_view(caller.user_id, &[], &Catalog::default()));
    };

    let timetables: Vec<Timetable> = persistence
        .list_timetables(&department)
        .map_err(translate_persistence_error)?;

    let taught = faculty_entries(caller.user_id, &timetables);
    let entries: Vec<ScheduleEntry> = taught.values().map(|(_, entry)| *entry).collect();
    let mut class_ids: Vec<i64> = taught.values().map(|(class_id, _)| *class_id).collect();
    class_ids.sort_unstable();
    class_ids.dedup();

    let classes: Vec<ClassSection> = persistence
        .get_class_sections_by_ids(&class_ids)
        .map_err(translate_persistence_error)?;
    let catalog: Catalog = load_catalog(persistence, &entries, &classes)?;

    let view: ScheduleView = faculty_view(caller.user_id, &timetables, &catalog);
    if view.is_empty() {
        debug!(
            faculty_id = caller.user_id,
            department = %department,
            "Faculty teaches no scheduled slots"
        );
    }
    Ok(view)
}

/// The faculty member's department: the identity provider's value, else
/// the faculty catalog record.
fn faculty_department(
    persistence: &mut Persistence,
    caller: &AuthenticatedCaller,
) -> Result<Option<DepartmentCode>, ApiError> {
    if let Some(department) = &caller.department {
        return Ok(Some(department.clone()));
    }
    let members: Vec<FacultyMember> = persistence
        .get_faculty_by_ids(&[caller.user_id])
        .map_err(translate_persistence_error)?;
    Ok(members.into_iter().next().map(|m| m.department))
}

/// Loads the catalog entities referenced by `entries` in batched lookups.
fn load_catalog(
    persistence: &mut Persistence,
    entries: &[ScheduleEntry],
    classes: &[ClassSection],
) -> Result<Catalog, ApiError> {
    let ids = referenced_ids(entries);
    let subject_ids: Vec<i64> = ids.subject_ids.into_iter().collect();
    let faculty_ids: Vec<i64> = ids.faculty_ids.into_iter().collect();
    let classroom_ids: Vec<i64> = ids.classroom_ids.into_iter().collect();

    let subjects: Vec<Subject> = persistence
        .get_subjects_by_ids(&subject_ids)
        .map_err(translate_persistence_error)?;
    let faculty: Vec<FacultyMember> = persistence
        .get_faculty_by_ids(&faculty_ids)
        .map_err(translate_persistence_error)?;
    let classrooms: Vec<Classroom> = persistence
        .get_classrooms_by_ids(&classroom_ids)
        .map_err(translate_persistence_error)?;

    Ok(Catalog::new(subjects, faculty, classrooms, classes))
}
