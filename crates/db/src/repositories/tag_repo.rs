//! Tag associations for playgrounds.
//!
//! Tags are referenced by numeric id only; this module resolves the
//! caller-supplied references and maintains the `playground_tags`
//! junction table. Attachment is always a full replacement of the prior
//! set, never additive.

use sqlx::PgPool;

use playground_core::types::DbId;

use crate::models::tag::Tag;
use crate::DbTransaction;

/// Manages tag lookups and playground-tag associations.
pub struct TagRepo;

impl TagRepo {
    /// Extract the numeric ids from caller-supplied tag references.
    ///
    /// Each entry is expected to be an object carrying a numeric `id`.
    /// Malformed entries (missing or non-numeric id) are dropped with a
    /// logged warning; they never fail the request.
    pub fn well_formed_ids(raw: &[serde_json::Value]) -> Vec<DbId> {
        raw.iter()
            .filter_map(|entry| match entry.get("id").and_then(|id| id.as_i64()) {
                Some(id) => Some(id),
                None => {
                    tracing::warn!(%entry, "dropping malformed tag reference");
                    None
                }
            })
            .collect()
    }

    /// Replace all tag associations for a playground within the caller's
    /// transaction.
    ///
    /// Deletes the existing set, then inserts the new one restricted to
    /// tag ids that actually exist. Duplicate ids in the input collapse to
    /// a single association, so repetition is idempotent.
    pub async fn replace_for_playground(
        tx: &mut DbTransaction<'_>,
        playground_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM playground_tags WHERE playground_id = $1")
            .bind(playground_id)
            .execute(&mut **tx)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO playground_tags (playground_id, tag_id) \
             SELECT $1, id FROM tags WHERE id = ANY($2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(playground_id)
        .bind(tag_ids)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// List all tags associated with a playground.
    pub async fn list_for_playground(
        pool: &PgPool,
        playground_id: DbId,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.label \
             FROM playground_tags pt \
             JOIN tags t ON t.id = pt.tag_id \
             WHERE pt.playground_id = $1 \
             ORDER BY t.label",
        )
        .bind(playground_id)
        .fetch_all(pool)
        .await
    }

    /// Same as [`list_for_playground`](Self::list_for_playground), but
    /// reading through the caller's uncommitted transaction.
    pub async fn list_for_playground_tx(
        tx: &mut DbTransaction<'_>,
        playground_id: DbId,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.label \
             FROM playground_tags pt \
             JOIN tags t ON t.id = pt.tag_id \
             WHERE pt.playground_id = $1 \
             ORDER BY t.label",
        )
        .bind(playground_id)
        .fetch_all(&mut **tx)
        .await
    }
}
