//! Handlers for the modern playground API.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use playground_core::error::CoreError;
use playground_core::validation;
use playground_db::models::playground::{
    CreatePlayground, Playground, PlaygroundWithTags, UpdatePlayground,
};
use playground_db::repositories::{PlaygroundRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/playgrounds`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/playgrounds?q=...
///
/// Search public playgrounds. An empty query is rejected before any store
/// query runs; an empty result reports not-found rather than an empty list.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Playground>>> {
    let q = params.q.unwrap_or_default();
    if q.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "query parameter 'q' must not be empty".to_string(),
        )));
    }

    let results = PlaygroundRepo::search(&state.pool, &q).await?;
    if results.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Playground",
            key: format!("query '{q}'"),
        }));
    }

    Ok(Json(results))
}

/// GET /api/playground/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PlaygroundWithTags>> {
    let playground = PlaygroundRepo::find_by_slug_with_tags(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playground",
            key: format!("slug '{slug}'"),
        }))?;
    Ok(Json(playground))
}

/// POST /api/playground
///
/// Create a playground with a generated slug, versionsCount 0, and the
/// well-formed subset of the requested tags attached.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayground>,
) -> AppResult<(StatusCode, Json<PlaygroundWithTags>)> {
    validation::validate_contents(&input.contents)?;
    let tag_ids = TagRepo::well_formed_ids(&input.tags);

    let mut tx = state.pool.begin().await?;
    let playground = PlaygroundRepo::create(&mut tx, &input).await?;
    TagRepo::replace_for_playground(&mut tx, playground.id, &tag_ids).await?;
    let tags = TagRepo::list_for_playground_tx(&mut tx, playground.id).await?;
    tx.commit().await?;

    tracing::info!(id = playground.id, slug = %playground.slug, "Playground created");

    Ok((
        StatusCode::CREATED,
        Json(PlaygroundWithTags { playground, tags }),
    ))
}

/// PUT /api/playground/{slug}
///
/// Update the record identified by the body's `id`, incrementing
/// versionsCount and replacing its tag set. The slug is immutable: a
/// record reached through a slug other than its own is a consistency
/// violation and the transaction is rolled back.
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdatePlayground>,
) -> AppResult<Json<PlaygroundWithTags>> {
    validation::validate_update_slug(&slug)?;
    validation::validate_contents(&input.contents)?;
    let tag_ids = TagRepo::well_formed_ids(&input.tags);

    let mut tx = state.pool.begin().await?;

    let existing = PlaygroundRepo::find_by_id_for_update(&mut tx, input.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playground",
            key: format!("id {}", input.id),
        }))?;

    if existing.slug != slug {
        return Err(AppError::Core(CoreError::Internal(format!(
            "slug mismatch for playground {}: stored '{}', requested '{slug}'",
            input.id, existing.slug
        ))));
    }

    let playground = PlaygroundRepo::apply_update(&mut tx, input.id, &input).await?;
    TagRepo::replace_for_playground(&mut tx, playground.id, &tag_ids).await?;
    let tags = TagRepo::list_for_playground_tx(&mut tx, playground.id).await?;
    tx.commit().await?;

    tracing::info!(
        id = playground.id,
        slug = %playground.slug,
        versions_count = playground.versions_count,
        "Playground updated"
    );

    // Cache purge fires only after the commit; its outcome is not ours.
    state.purger.purge_for_slug(&slug);

    Ok(Json(PlaygroundWithTags { playground, tags }))
}
