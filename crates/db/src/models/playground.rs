//! Playground models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use playground_core::types::{DbId, Timestamp};

use crate::models::tag::Tag;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `playgrounds` table.
///
/// The slug is the public identity and never changes after creation;
/// `versions_count` increments by exactly one per update.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playground {
    pub id: DbId,
    pub slug: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub contents: String,
    pub pixi_version: Option<String>,
    pub is_public: bool,
    pub versions_count: i32,
    pub external_js: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A playground enriched with its associated tags.
#[derive(Debug, Clone, Serialize)]
pub struct PlaygroundWithTags {
    #[serde(flatten)]
    pub playground: Playground,
    pub tags: Vec<Tag>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /api/playground`.
///
/// Tag references are kept as raw JSON values: the association contract
/// tolerates malformed entries (dropped with a warning), so they must not
/// fail deserialization of the whole request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayground {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub contents: String,
    pub author: Option<String>,
    pub pixi_version: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,
    #[serde(default)]
    pub external_js: Vec<String>,
}

/// DTO for `PUT /api/playground/{slug}`.
///
/// Carries the internal id of the record to mutate; the slug arrives in
/// the path and must match the stored record after the update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayground {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub contents: String,
    pub author: Option<String>,
    pub pixi_version: Option<String>,
    pub is_public: Option<bool>,
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,
    #[serde(default)]
    pub external_js: Vec<String>,
}
