//! Repository for the `playground_versions` table (legacy model).
//!
//! Versions are immutable snapshots keyed by `(playground_id, version)`.
//! Creation writes version 0 with a sequence-assigned id; later versions
//! append with the next version number.

use sqlx::PgPool;

use playground_core::types::DbId;

use crate::models::playground_version::{CreateLegacyPlayground, PlaygroundVersion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "playground_id, version, name, description, author, \
    contents, pixi_version, is_public, created_at";

/// Provides snapshot storage for the legacy playground API.
pub struct PlaygroundVersionRepo;

impl PlaygroundVersionRepo {
    /// Fetch the exact snapshot row for `(id, version)`.
    pub async fn find(
        pool: &PgPool,
        id: DbId,
        version: i32,
    ) -> Result<Option<PlaygroundVersion>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM playground_versions \
             WHERE playground_id = $1 AND version = $2"
        );
        sqlx::query_as::<_, PlaygroundVersion>(&sql)
            .bind(id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    /// Create a new legacy playground: a version-0 snapshot with a fresh
    /// id drawn from the legacy id sequence.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLegacyPlayground,
    ) -> Result<PlaygroundVersion, sqlx::Error> {
        let sql = format!(
            "INSERT INTO playground_versions \
                (playground_id, version, name, description, author, contents, pixi_version, is_public) \
             VALUES (nextval('legacy_playground_ids'), 0, $1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlaygroundVersion>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.author)
            .bind(&input.contents)
            .bind(&input.pixi_version)
            .bind(input.is_public)
            .fetch_one(pool)
            .await
    }

    /// Append the next version snapshot for an existing playground id.
    ///
    /// Returns `None` if the base playground id does not exist; the new
    /// version number is assigned atomically as max existing + 1.
    pub async fn create_version(
        pool: &PgPool,
        id: DbId,
        input: &CreateLegacyPlayground,
    ) -> Result<Option<PlaygroundVersion>, sqlx::Error> {
        let sql = format!(
            "INSERT INTO playground_versions \
                (playground_id, version, name, description, author, contents, pixi_version, is_public) \
             SELECT $1, MAX(version) + 1, $2, $3, $4, $5, $6, $7 \
             FROM playground_versions WHERE playground_id = $1 \
             HAVING COUNT(*) > 0 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlaygroundVersion>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.author)
            .bind(&input.contents)
            .bind(&input.pixi_version)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }
}
