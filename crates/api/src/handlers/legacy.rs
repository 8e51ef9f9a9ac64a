//! Handlers for the legacy playground API.
//!
//! The legacy surface stores explicit version snapshots and answers with
//! an `{ "item": ..., "contents": ... }` envelope. Ids and version
//! numbers arrive as raw path segments and are validated here so a bad
//! value reports invalid input instead of a routing miss.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use playground_core::error::CoreError;
use playground_core::types::DbId;
use playground_core::validation;
use playground_db::models::playground_version::{CreateLegacyPlayground, PlaygroundVersion};
use playground_db::repositories::PlaygroundVersionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response envelope for all legacy endpoints.
#[derive(Debug, Serialize)]
pub struct LegacyEnvelope {
    pub item: PlaygroundVersion,
    pub contents: String,
}

fn envelope(row: PlaygroundVersion) -> Json<LegacyEnvelope> {
    Json(LegacyEnvelope {
        contents: row.contents.clone(),
        item: row,
    })
}

fn not_found(id: DbId, version: i32) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Playground",
        key: format!("id {id} version {version}"),
    })
}

fn parse_version(raw: &str) -> Result<i32, CoreError> {
    let version = validation::parse_int_param("version", raw)?;
    i32::try_from(version)
        .map_err(|_| CoreError::Validation(format!("'version' out of range: {version}")))
}

/// GET /api/{id}
///
/// Returns the version-0 snapshot for the playground.
pub async fn get_playground(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<LegacyEnvelope>> {
    let id = validation::parse_int_param("id", &raw_id)?;

    let row = PlaygroundVersionRepo::find(&state.pool, id, 0)
        .await?
        .ok_or_else(|| not_found(id, 0))?;
    Ok(envelope(row))
}

/// GET /api/{id}/{version}
pub async fn get_version(
    State(state): State<AppState>,
    Path((raw_id, raw_version)): Path<(String, String)>,
) -> AppResult<Json<LegacyEnvelope>> {
    let id = validation::parse_int_param("id", &raw_id)?;
    let version = parse_version(&raw_version)?;

    let row = PlaygroundVersionRepo::find(&state.pool, id, version)
        .await?
        .ok_or_else(|| not_found(id, version))?;
    Ok(envelope(row))
}

/// POST /api
///
/// Create a legacy playground: validates the required fields, then writes
/// the version-0 snapshot.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLegacyPlayground>,
) -> AppResult<(StatusCode, Json<LegacyEnvelope>)> {
    validate_legacy_input(&input)?;

    let row = PlaygroundVersionRepo::create(&state.pool, &input).await?;

    tracing::info!(id = row.playground_id, "Legacy playground created");

    Ok((StatusCode::CREATED, envelope(row)))
}

/// POST /api/{id}
///
/// Append a new version snapshot for an existing playground id.
pub async fn create_version(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<CreateLegacyPlayground>,
) -> AppResult<(StatusCode, Json<LegacyEnvelope>)> {
    let id = validation::parse_int_param("id", &raw_id)?;
    validate_legacy_input(&input)?;

    let row = PlaygroundVersionRepo::create_version(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playground",
            key: format!("id {id}"),
        }))?;

    tracing::info!(id = row.playground_id, version = row.version, "Legacy version created");

    Ok((StatusCode::CREATED, envelope(row)))
}

fn validate_legacy_input(input: &CreateLegacyPlayground) -> Result<(), CoreError> {
    validation::validate_legacy_fields(
        input.name.as_deref(),
        input.author.as_deref(),
        input.contents.as_deref(),
    )?;
    // Required-field check above guarantees contents is present.
    validation::validate_contents(input.contents.as_deref().unwrap_or_default())
}
