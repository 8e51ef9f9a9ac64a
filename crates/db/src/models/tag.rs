//! Tag model.

use serde::Serialize;
use sqlx::FromRow;

use playground_core::types::DbId;

/// A row from the `tags` table.
///
/// Tags are seeded by migration and only ever referenced by id from
/// playground requests; this core never creates them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub label: String,
}
