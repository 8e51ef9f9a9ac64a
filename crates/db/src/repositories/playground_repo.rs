//! Repository for the `playgrounds` table.

use sqlx::PgPool;

use playground_core::slug;
use playground_core::types::DbId;

use crate::models::playground::{CreatePlayground, Playground, PlaygroundWithTags, UpdatePlayground};
use crate::repositories::TagRepo;
use crate::DbTransaction;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, description, author, contents, \
    pixi_version, is_public, versions_count, external_js, created_at, updated_at";

/// Provides CRUD operations for playground records.
///
/// Write operations take a transaction handle: the caller opens the
/// transaction, threads it through the repository and tag-association
/// calls, and holds the single commit/rollback decision point.
pub struct PlaygroundRepo;

impl PlaygroundRepo {
    /// Search public playgrounds by name or description.
    ///
    /// Matching is delegated to the store. An empty result is not an
    /// error at this layer; the handler decides how absence is reported.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Playground>, sqlx::Error> {
        let pattern = format!("%{query}%");
        let sql = format!(
            "SELECT {COLUMNS} FROM playgrounds \
             WHERE is_public = TRUE AND (name ILIKE $1 OR description ILIKE $1) \
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Playground>(&sql)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Find a playground by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Playground>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM playgrounds WHERE slug = $1");
        sqlx::query_as::<_, Playground>(&sql)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a playground by slug, eagerly including its tags.
    pub async fn find_by_slug_with_tags(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PlaygroundWithTags>, sqlx::Error> {
        match Self::find_by_slug(pool, slug).await? {
            Some(playground) => {
                let tags = TagRepo::list_for_playground(pool, playground.id).await?;
                Ok(Some(PlaygroundWithTags { playground, tags }))
            }
            None => Ok(None),
        }
    }

    /// Insert a new playground with a freshly generated slug and
    /// `versions_count` initialized to 0.
    pub async fn create(
        tx: &mut DbTransaction<'_>,
        input: &CreatePlayground,
    ) -> Result<Playground, sqlx::Error> {
        let sql = format!(
            "INSERT INTO playgrounds \
                (slug, name, description, author, contents, pixi_version, is_public, external_js) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playground>(&sql)
            .bind(slug::generate())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.author)
            .bind(&input.contents)
            .bind(&input.pixi_version)
            .bind(input.is_public)
            .bind(&input.external_js)
            .fetch_one(&mut **tx)
            .await
    }

    /// Load a playground by id inside the active transaction, taking a
    /// row lock so concurrent updates to the same record serialize.
    pub async fn find_by_id_for_update(
        tx: &mut DbTransaction<'_>,
        id: DbId,
    ) -> Result<Option<Playground>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM playgrounds WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Playground>(&sql)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Apply field changes to an existing playground, incrementing
    /// `versions_count` by exactly 1. The slug is never touched.
    ///
    /// The caller must have loaded the row with
    /// [`find_by_id_for_update`](Self::find_by_id_for_update) first.
    pub async fn apply_update(
        tx: &mut DbTransaction<'_>,
        id: DbId,
        input: &UpdatePlayground,
    ) -> Result<Playground, sqlx::Error> {
        let sql = format!(
            "UPDATE playgrounds SET \
                name = $2, \
                description = $3, \
                author = $4, \
                contents = $5, \
                pixi_version = $6, \
                is_public = COALESCE($7, is_public), \
                external_js = $8, \
                versions_count = versions_count + 1, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playground>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.author)
            .bind(&input.contents)
            .bind(&input.pixi_version)
            .bind(input.is_public)
            .bind(&input.external_js)
            .fetch_one(&mut **tx)
            .await
    }
}
