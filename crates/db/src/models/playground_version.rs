//! Legacy playground snapshot models.
//!
//! The legacy API stores explicit version rows keyed by
//! `(playground_id, version)`; each row is an immutable snapshot. Version 0
//! is written at creation and later versions append, never mutate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use playground_core::types::{DbId, Timestamp};

/// A row from the `playground_versions` table.
///
/// `contents` is skipped during serialization: the legacy response
/// envelope carries it as a separate top-level field next to `item`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundVersion {
    pub playground_id: DbId,
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub author: String,
    #[serde(skip_serializing)]
    pub contents: String,
    pub pixi_version: Option<String>,
    pub is_public: bool,
    pub created_at: Timestamp,
}

/// DTO for legacy create and new-version requests.
///
/// Required fields are `Option` so the validation layer can report which
/// one is missing instead of the framework rejecting the whole body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLegacyPlayground {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub pixi_version: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}
