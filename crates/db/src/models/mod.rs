//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request bodies that mutate it
//!
//! Wire names are camelCase to match the public API contract.

pub mod playground;
pub mod playground_version;
pub mod tag;
