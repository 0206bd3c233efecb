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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod identity;
mod locks;

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use campus_timetable_api::{
    ApiError, AuthorizationService, GenerateTimetableRequest, GenerateTimetableResponse,
    GenerationInput, ScheduleView, choose_seed, get_timetable, load_generation_input,
    resolve_department, run_generation, store_generation,
};
use campus_timetable_domain::DepartmentCode;
use campus_timetable_persistence::{CatalogFixture, CatalogImportSummary, Persistence};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::identity::Caller;
use crate::locks::DepartmentLocks;

/// Campus Timetable Server - HTTP server for department timetable generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, conflicts_with = "mysql_url")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes the place of `--database`.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Catalog JSON file to import on startup
    #[arg(short, long)]
    catalog: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the catalog and generated timetables.
    persistence: Arc<Mutex<Persistence>>,
    /// Serializes generation runs per department.
    locks: DepartmentLocks,
}

impl AppState {
    fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            locks: DepartmentLocks::new(),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::SchedulingConflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/timetable/generate` endpoint.
///
/// The persistence lock is released while the generator runs; the
/// department lock keeps concurrent runs for one department apart.
async fn handle_generate(
    AxumState(app_state): AxumState<AppState>,
    Caller(caller): Caller,
    body: Option<Json<GenerateTimetableRequest>>,
) -> Result<Json<GenerateTimetableResponse>, HttpError> {
    let request: GenerateTimetableRequest = body.map(|Json(req)| req).unwrap_or_default();

    AuthorizationService::authorize_generate(&caller).map_err(ApiError::from)?;
    let department: DepartmentCode = resolve_department(&caller, &request)?;
    let seed: u64 = choose_seed(&request);

    info!(
        user_id = caller.user_id,
        department = %department,
        seed,
        "Handling generate timetable request"
    );

    let _generation = app_state.locks.acquire(&department).await;

    let mut persistence = app_state.persistence.lock().await;
    let input: GenerationInput = load_generation_input(&mut persistence, &department)?;
    drop(persistence);

    let result = run_generation(&input, seed, OffsetDateTime::now_utc())?;

    let mut persistence = app_state.persistence.lock().await;
    let response: GenerateTimetableResponse = store_generation(&mut persistence, &result, seed)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/timetable` endpoint.
///
/// Roles without a timetable view receive an empty JSON object.
async fn handle_get_timetable(
    AxumState(app_state): AxumState<AppState>,
    Caller(caller): Caller,
) -> Result<Response, HttpError> {
    info!(
        user_id = caller.user_id,
        role = caller.role.as_str(),
        "Handling get timetable request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let view: Option<ScheduleView> = get_timetable(&mut persistence, &caller)?;
    drop(persistence);

    Ok(match view {
        Some(view) => Json(view).into_response(),
        None => Json(serde_json::json!({})).into_response(),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/timetable/generate", post(handle_generate))
        .route("/timetable", get(handle_get_timetable))
        .with_state(app_state)
}

fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        return Ok(Persistence::new_with_mysql(url)?);
    }
    if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        return Ok(Persistence::new_with_file(db_path)?);
    }
    info!("Using in-memory database");
    Ok(Persistence::new_in_memory()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Campus Timetable Server");

    let mut persistence: Persistence = open_persistence(&args)?;

    if let Some(catalog_path) = &args.catalog {
        let json: String = std::fs::read_to_string(catalog_path)?;
        let fixture: CatalogFixture = CatalogFixture::from_json(&json)?;
        let summary: CatalogImportSummary = persistence.import_catalog(&fixture)?;
        info!(path = %catalog_path, ?summary, "Loaded catalog");
    }

    let app: Router = build_router(AppState::new(persistence));

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
